//! Ad-hoc code signing of the application bundle.
//!
//! Signing is best-effort: a missing signing tool or a failed signature is
//! reported as a [`SigningOutcome`] instead of an error.

use super::tool_detection::probe_tool;
use crate::bundler::{
    Settings,
    utils::process::{ToolInvocation, run_tool},
};
use std::path::Path;

/// Result of a signing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningOutcome {
    /// The signing tool succeeded.
    Signed {
        /// Identity used ("-" for ad-hoc).
        identity: String,
    },
    /// Signing was not attempted.
    Skipped {
        /// Why it was skipped.
        reason: String,
    },
    /// The signing tool ran and failed.
    Failed {
        /// Failure description.
        reason: String,
    },
}

impl SigningOutcome {
    /// Whether the bundle carries a fresh signature.
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed { .. })
    }
}

/// Signs `bundle` with `codesign --force --deep --sign <identity>`.
pub async fn sign_bundle<F>(settings: &Settings, bundle: &Path, on_line: &F) -> SigningOutcome
where
    F: Fn(&str) + Sync,
{
    let macos = settings.macos();
    let Some(program) = probe_tool(&macos.codesign, settings.project_directory()) else {
        log::warn!("{} not available, bundle left unsigned", macos.codesign);
        return SigningOutcome::Skipped {
            reason: format!("`{}` not found", macos.codesign),
        };
    };

    let invocation = ToolInvocation::new(
        macos.codesign.clone(),
        program,
        settings.project_directory(),
        settings.tools().timeout(),
    )
    .arg("--force")
    .arg("--deep")
    .arg("--sign")
    .arg(&macos.signing_identity)
    .arg(bundle);

    log::info!(
        "Signing {} with identity {}",
        bundle.display(),
        macos.signing_identity
    );

    match run_tool(&invocation, on_line).await {
        Ok(result) if result.status.success() => {
            log::info!("✓ Signed {}", bundle.display());
            SigningOutcome::Signed {
                identity: macos.signing_identity.clone(),
            }
        }
        Ok(result) => {
            log::warn!("{} exited with {}", macos.codesign, result.status);
            SigningOutcome::Failed {
                reason: format!("`{}` exited with {}", macos.codesign, result.status),
            }
        }
        Err(e) => {
            log::warn!("Signing failed: {}", e);
            SigningOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
