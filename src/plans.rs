use crate::error::{MakerError, Result};
use crate::model::PropertySpec;

/// Decides the doc-comment block placed above a generated declaration. The
/// language pack picks the rendering that matches its comment syntax.
pub trait DocPlan: Send + Sync {
    fn id(&self) -> &'static str;

    fn render_for_csharp(&self, spec: &PropertySpec) -> String;

    fn render_for_rust(&self, spec: &PropertySpec) -> String;
}

#[cfg(feature = "plan_summary")]
pub mod summary;
#[cfg(feature = "plan_compact")]
pub mod compact;

pub fn get_plan(plan: &str) -> Result<Box<dyn DocPlan>> {
    match plan {
        #[cfg(feature = "plan_summary")]
        "summary" => Ok(Box::new(summary::SummaryPlan)),
        #[cfg(feature = "plan_compact")]
        "compact" => Ok(Box::new(compact::CompactPlan)),
        _ => Err(MakerError::Unsupported(format!("doc plan '{plan}' not available"))),
    }
}
