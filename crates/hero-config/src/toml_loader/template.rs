//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hero Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Hero"
# width = 1280           # 200-7680
# height = 800           # 200-4320
# transparent = true

[scene]
# preset = "textured"    # textured, gradient

[animation]
# time_step = 0.01       # per tick at 60 fps, (0.0, 1.0]
# time_mode = "fixed"    # fixed, delta

[transition]
# duration_ms = 2000     # 1-60000
# target_scale = 20.0
# camera_pullback = 10.0
# target_url = ""        # page opened after the zoom; empty disables

[assets]
# root = "static"
# sphere_texture = "images/giraffe_texture1.png"
# background_video = "videos/kah.gif"

[logging]
# level = "info"         # trace, debug, info, warn, error
# log_fps = true
"##
    .to_string()
}
