pub mod credentials;
pub mod register;
pub mod verify;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    VerifyToken(verify::Args),
    RegisterToken(register::Args),
    ListCredentials(credentials::ListArgs),
    DeleteCredential(credentials::DeleteArgs),
}

impl Action {
    /// Execute the action against the deployment described by `globals`.
    /// # Errors
    /// Returns an error if the client cannot be built or the API call fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}
