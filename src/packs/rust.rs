use super::LanguagePack;
use crate::case::to_snake;
use crate::model::{DataType, PropertySpec};
use crate::plans::DocPlan;

/// Struct fields: `pub cnt: Option<i32>,`. Optional columns become `Option`;
/// field names are always snake_case, whatever the naming mode produced.
#[derive(Debug, Default)]
pub struct RustPack;

impl LanguagePack for RustPack {
    fn id(&self) -> &'static str { "rust" }

    fn type_name(&self, ty: DataType) -> Option<&'static str> {
        match ty {
            DataType::String => Some("String"),
            DataType::Int => Some("i32"),
            DataType::DateTime => Some("chrono::NaiveDateTime"),
            DataType::Unsupported => None,
        }
    }

    fn render_property(&self, plan: &dyn DocPlan, spec: &PropertySpec) -> Option<String> {
        let ty = self.type_name(spec.data_type)?;
        let ty = if spec.nullable() { format!("Option<{ty}>") } else { ty.to_string() };

        let mut out = plan.render_for_rust(spec);
        out.push_str(&format!("pub {}: {ty},\n", to_snake(&spec.physical_name)));
        Some(out)
    }
}
