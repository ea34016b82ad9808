use super::DocPlan;
use crate::model::PropertySpec;

pub struct CompactPlan;

impl CompactPlan {
    fn line(spec: &PropertySpec) -> String {
        if spec.logical_name.is_empty() {
            "///\n".to_string()
        } else {
            format!("/// {}\n", spec.logical_name)
        }
    }
}

impl DocPlan for CompactPlan {
    fn id(&self) -> &'static str { "compact" }

    fn render_for_csharp(&self, spec: &PropertySpec) -> String {
        Self::line(spec)
    }

    fn render_for_rust(&self, spec: &PropertySpec) -> String {
        Self::line(spec)
    }
}
