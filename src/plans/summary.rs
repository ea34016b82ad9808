use super::DocPlan;
use crate::model::PropertySpec;

/// XML `<summary>` block for C#, a short paragraph for Rust.
pub struct SummaryPlan;

impl DocPlan for SummaryPlan {
    fn id(&self) -> &'static str { "summary" }

    fn render_for_csharp(&self, spec: &PropertySpec) -> String {
        let mut out = String::new();
        out.push_str("/// <summary>\n");
        if spec.logical_name.is_empty() {
            out.push_str("/// \n");
        } else {
            out.push_str(&format!("/// Gets or sets the {}.\n", spec.logical_name));
        }
        out.push_str("/// </summary>\n");
        out
    }

    fn render_for_rust(&self, spec: &PropertySpec) -> String {
        let mut out = String::new();
        if !spec.logical_name.is_empty() {
            out.push_str(&format!("/// {}\n", spec.logical_name));
            out.push_str("///\n");
        }
        if spec.required {
            out.push_str("/// Required field.\n");
        } else {
            out.push_str("/// Optional field.\n");
        }
        out
    }
}
