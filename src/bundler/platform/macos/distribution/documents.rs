//! README and license generation.
//!
//! Both documents are rendered from fixed Handlebars templates, so their
//! text depends only on the package settings.

use crate::bundler::{
    Error, Result,
    settings::Settings,
};
use handlebars::Handlebars;
use std::collections::BTreeMap;

const README_TEMPLATE: &str = r#"{{product_name}} v{{version}}
{{description}}

INSTALLATION
------------
1. Unzip {{package_name}}.zip.
2. Drag {{bundle_name}} into your Applications folder.
3. On first launch, right-click {{bundle_name}} and choose "Open".
   macOS asks for confirmation because the app is signed ad-hoc.

PERMISSIONS
-----------
{{product_name}} needs two permissions to work:
- Camera: to see your hand.
- Accessibility: to move the cursor and click.

Grant them in System Settings > Privacy & Security > Camera and
System Settings > Privacy & Security > Accessibility, then restart
{{product_name}}.

REQUIREMENTS
------------
- macOS {{minimum_system_version}} or later
- A built-in or USB webcam
- Good lighting for reliable hand tracking

LICENSE
-------
{{product_name}} is released under the MIT License. See {{license_name}}.
"#;

const LICENSE_TEMPLATE: &str = r#"MIT License

Copyright (c) {{year}} {{holder}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

fn renderer() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars
}

/// Renders the user-facing README.
pub fn render_readme(settings: &Settings) -> Result<String> {
    let package = settings.package();
    let mut data = BTreeMap::new();
    data.insert("product_name", package.product_name.clone());
    data.insert("version", package.version.clone());
    data.insert("description", package.description.clone());
    data.insert("package_name", settings.package_name());
    data.insert("bundle_name", settings.bundle_name());
    data.insert(
        "minimum_system_version",
        package.minimum_system_version.clone(),
    );
    data.insert("license_name", settings.distribution().license_name.clone());

    renderer()
        .render_template(README_TEMPLATE, &data)
        .map_err(Error::from)
}

/// Renders the MIT license with the configured year and holder.
pub fn render_license(settings: &Settings) -> Result<String> {
    let package = settings.package();
    let mut data = BTreeMap::new();
    data.insert("year", package.license_year.to_string());
    data.insert("holder", package.copyright_holder.clone());

    renderer()
        .render_template(LICENSE_TEMPLATE, &data)
        .map_err(Error::from)
}
