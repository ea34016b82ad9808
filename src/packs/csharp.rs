use super::LanguagePack;
use crate::model::{DataType, PropertySpec};
use crate::plans::DocPlan;

/// Auto-properties with initializers:
/// `public int? Count { get; set; } = null;`
#[derive(Debug, Default)]
pub struct CSharpPack;

impl CSharpPack {
    fn initializer(spec: &PropertySpec) -> Option<&'static str> {
        match spec.data_type {
            DataType::String => Some("string.Empty"),
            DataType::Int if spec.required => Some("0"),
            DataType::DateTime if spec.required => Some("DateTime.MinValue"),
            DataType::Int | DataType::DateTime => Some("null"),
            DataType::Unsupported => None,
        }
    }
}

impl LanguagePack for CSharpPack {
    fn id(&self) -> &'static str { "csharp" }

    fn type_name(&self, ty: DataType) -> Option<&'static str> {
        match ty {
            DataType::String => Some("string"),
            DataType::Int => Some("int"),
            DataType::DateTime => Some("DateTime"),
            DataType::Unsupported => None,
        }
    }

    fn render_property(&self, plan: &dyn DocPlan, spec: &PropertySpec) -> Option<String> {
        let ty = self.type_name(spec.data_type)?;
        let init = Self::initializer(spec)?;
        let nullable = if spec.nullable() { "?" } else { "" };

        let mut out = plan.render_for_csharp(spec);
        out.push_str(&format!(
            "public {ty}{nullable} {} {{ get; set; }} = {init};\n",
            spec.physical_name
        ));
        Some(out)
    }
}
