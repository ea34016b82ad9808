use crate::{
    error::{MakerError, Result},
    model::{DataType, PropertySpec},
    plans::DocPlan,
};

pub trait LanguagePack: Send + Sync {
    fn id(&self) -> &'static str;

    /// Target-language type for a resolved column type. `None` for types
    /// the pack cannot express.
    fn type_name(&self, ty: DataType) -> Option<&'static str>;

    /// Doc comment (chosen by the plan) followed by one declaration line.
    /// `None` when the property's type has no mapping in this pack.
    fn render_property(&self, plan: &dyn DocPlan, spec: &PropertySpec) -> Option<String>;
}

#[cfg(feature = "lang_csharp")]
pub mod csharp;
#[cfg(feature = "lang_rust")]
pub mod rust;

pub fn get_pack(lang: &str) -> Result<Box<dyn LanguagePack>> {
    match lang {
        #[cfg(feature = "lang_csharp")]
        "csharp" | "cs" | "c#" => Ok(Box::new(csharp::CSharpPack)),
        #[cfg(feature = "lang_rust")]
        "rust" | "rs" => Ok(Box::new(rust::RustPack)),
        _ => Err(MakerError::Unsupported(format!("language pack '{lang}' not available"))),
    }
}
