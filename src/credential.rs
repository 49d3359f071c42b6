//! Credential gate shown before any generation can be attempted.
//!
//! The gate probes a host capability for a stored provider credential. The
//! capability may be absent entirely, in which case a no-op implementation
//! stands in and the gate never triggers.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Errors from the credential selection flow
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Credential selection failed: {0}")]
    SelectionFailed(String),
}

/// Host capability for credential probing and selection
pub trait CredentialHost: Send + Sync {
    /// Whether a provider credential is already selected
    fn has_credential(&self) -> bool;

    /// Ask the host to run its credential-selection flow. The outcome is
    /// opaque; whether the user actually completed selection is not
    /// observable from here.
    fn open_credential_selector(&self) -> Result<(), CredentialError>;
}

/// Host backed by the stored app configuration. The selection flow itself is
/// the key-entry form in the webview, so opening it is only acknowledged.
pub struct ConfigCredentialHost;

impl CredentialHost for ConfigCredentialHost {
    fn has_credential(&self) -> bool {
        Config::load_or_default().has_api_key()
    }

    fn open_credential_selector(&self) -> Result<(), CredentialError> {
        Ok(())
    }
}

/// Stand-in when no credential capability is available. Reports a credential
/// present so the gate never triggers.
pub struct NoopCredentialHost;

impl CredentialHost for NoopCredentialHost {
    fn has_credential(&self) -> bool {
        true
    }

    fn open_credential_selector(&self) -> Result<(), CredentialError> {
        Ok(())
    }
}

/// Blocking credential prompt state
pub struct CredentialGate {
    host: Box<dyn CredentialHost>,
    visible: bool,
}

impl CredentialGate {
    pub fn new(host: Box<dyn CredentialHost>) -> Self {
        Self {
            host,
            visible: false,
        }
    }

    /// Probe the host once at startup and show the gate when no credential
    /// is selected
    pub fn check_on_startup(&mut self) -> bool {
        if !self.host.has_credential() {
            info!("No provider credential selected, showing credential gate");
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Run the host's selection flow. The gate closes optimistically once
    /// the flow returns, even when it reports a failure, since the actual
    /// selection outcome cannot be verified.
    pub fn request_selection(&mut self) {
        if let Err(e) = self.host.open_credential_selector() {
            warn!("Credential selector failed: {}", e);
        }
        self.visible = false;
    }

    /// Reactive signal from the generation path: the provider rejected the
    /// credential, so prompt again.
    pub fn reopen(&mut self) {
        info!("Provider rejected credential, reopening credential gate");
        self.visible = true;
    }
}
