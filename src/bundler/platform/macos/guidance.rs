//! Operator-facing text printed after a successful build.

use crate::bundler::Settings;

/// How to launch the freshly built bundle.
pub fn usage_hints(settings: &Settings) -> Vec<String> {
    let dist = &settings.tools().dist_dir;
    vec![
        format!(
            "Launch:  open {}",
            dist.join(settings.bundle_name()).display()
        ),
        format!(
            "Console: ./{}",
            dist.join(settings.bundle_name())
                .join("Contents/MacOS")
                .join(settings.product_name())
                .display()
        ),
    ]
}

/// Manual permission setup the operating system requires after install.
pub fn permission_instructions(settings: &Settings) -> Vec<String> {
    let product = settings.product_name();
    vec![
        format!("1. Move {} to the Applications folder.", settings.bundle_name()),
        format!("2. Right-click {} and choose \"Open\" on first launch.", settings.bundle_name()),
        "3. Open System Settings > Privacy & Security.".to_string(),
        format!("4. Under Camera, allow {product}."),
        format!("5. Under Accessibility, add and enable {product}."),
        format!("6. Restart {product} so the permissions take effect."),
    ]
}
