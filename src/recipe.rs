use crate::{error::ScaffoldError, request::ProvisioningRequest};

/// Where template repositories live unless `--template-base` says otherwise
pub const DEFAULT_TEMPLATE_BASE: &str = "https://github.com/lassejlv";

/// Everything needed to stand up one database type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Value accepted by `--type`
    pub id: &'static str,
    /// Repository name under the template base
    pub template: &'static str,
    /// Container image pulled before the stack starts
    pub image: &'static str,
    /// Prefix of every key written to `.env`
    pub env_prefix: &'static str,
}

/// Supported database types, adding one only needs a new entry here
pub static RECIPES: &[Recipe] = &[Recipe {
    id: "postgres",
    template: "postgres",
    image: "postgres:16",
    env_prefix: "POSTGRES",
}];

/// Identifiers of all supported database types, in table order
#[must_use]
pub fn supported() -> Vec<&'static str> {
    RECIPES.iter().map(|recipe| recipe.id).collect()
}

/// Find the recipe for a database type
///
/// # Errors
///
/// Returns `ScaffoldError::UnsupportedType` if `id` is not in the table
pub fn lookup(id: &str) -> Result<&'static Recipe, ScaffoldError> {
    RECIPES
        .iter()
        .find(|recipe| recipe.id == id)
        .ok_or_else(|| ScaffoldError::UnsupportedType {
            requested: id.to_string(),
            supported: supported(),
        })
}

impl Recipe {
    /// Clone URL of the template repository
    #[must_use]
    pub fn template_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.template)
    }

    /// Contents of the `.env` file consumed by the template's compose file
    #[must_use]
    pub fn env_file(&self, request: &ProvisioningRequest) -> String {
        let prefix = self.env_prefix;
        let mut env = [
            format!("{prefix}_USER={}", request.username()),
            format!("{prefix}_PASSWORD={}", request.password()),
            format!("{prefix}_DB={}", request.database()),
            format!("{prefix}_VOLUME_NAME={}", request.database()),
            format!("{prefix}_PORT={}", request.port()),
        ]
        .join("\n");
        env.push('\n');
        env
    }
}
