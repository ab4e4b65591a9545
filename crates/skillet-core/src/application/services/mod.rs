//! Use-case services.
//!
//! Each service owns boxed ports and exposes one operation of the `new`
//! workflow: fetch template → load project model → apply user settings →
//! initialize deploy delegate.

pub mod deploy_delegate;
pub mod project_loader;
pub mod settings_updater;
pub mod template_fetcher;

pub use deploy_delegate::DeployDelegateInitializer;
pub use project_loader::ProjectLoader;
pub use settings_updater::SettingsUpdater;
pub use template_fetcher::TemplateFetcher;
