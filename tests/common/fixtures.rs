//! Test fixtures - reusable content constants for tests.

/// Entry HTML as a bundler emits it
pub const BASE_INDEX: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Foo</title>
    <script type="module" crossorigin src="/assets/index-4f2a.js"></script>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

/// Minimal entry HTML
pub const TINY_INDEX: &str = "<html><head><title>Foo</title></head><body></body></html>";

pub const BUNDLE_JS: &str = "console.log(window.__APP_TYPE__);\n";

pub const BUNDLE_JS_MAP: &str = r#"{"version":3,"sources":["main.tsx"],"mappings":"AAAA"}"#;

pub const CONSOLE_TITLE: &str = "GreenFlow - API Console";

pub const LANDING_TITLE: &str = "GreenFlow - Green Logistics Platform";

/// Flags block written into the console artifact
pub const CONSOLE_BLOCK: &str = "<!-- APP_FLAGS_START -->\n<script type=\"module\">window.__APP_TYPE__ = \"console\"; window.__BLOCKED_ROUTES__ = [\"/\",\"/shipper\",\"/carrier\",\"/owner\"];</script>\n<!-- APP_FLAGS_END -->";

/// Flags block written into the landing artifact
pub const LANDING_BLOCK: &str = "<!-- APP_FLAGS_START -->\n<script type=\"module\">window.__APP_TYPE__ = \"landing\"; window.__BLOCKED_ROUTES__ = [\"/console\"];</script>\n<!-- APP_FLAGS_END -->";

pub const FLAGS_START: &str = "<!-- APP_FLAGS_START -->";
