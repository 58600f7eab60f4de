//! CSS/HTML snippet that plays a packed atlas as a sprite animation.
//!
//! The atlas image is shifted one cell at a time with two stepped keyframe animations:
//! `scan-x` walks the columns of a row, `scan-y` advances rows once per full row.

use crate::foundation::core::{Animation, Layout};

/// Frames wider than this ratio are sized against the viewport width instead of its height.
pub const VIEWPORT_ASPECT_SPLIT: f64 = 1024.0 / 613.0;

/// Render the playback snippet for `layout`.
///
/// The image `src` is left as a placeholder comment.
pub fn render_html(anim: &Animation, layout: Layout) -> String {
    let aspect = f64::from(anim.frame_width()) / f64::from(anim.frame_height());
    let root = root_vars(anim, layout);
    if aspect <= VIEWPORT_ASPECT_SPLIT {
        format!(
            r#"<style>
{root}
    img {{
        width: calc(100vh * var(--aspect-ratio) * var(--columns));
        height: calc(100vh * var(--rows));
    }}

    .clip {{
        margin: auto;
        height: 100vh;
        width: calc(100vh * var(--aspect-ratio));
        overflow: hidden;
    }}
{SCAN_KEYFRAMES}</style>
<div class="clip">
    <div class="scan-y">
        <img class="scan-x" src="<!-- INSERT IMAGE URL HERE -->"/>
    </div>
</div>"#
        )
    } else {
        format!(
            r#"<style>
{root}
    img {{
        width: calc(100vw * var(--columns));
        height: calc(100vw * var(--rows) / var(--aspect-ratio));
    }}

    .clip {{
        height: calc(100vw / var(--aspect-ratio));
        width: 100vw;
        overflow: hidden;
    }}

    .center {{
        height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
    }}
{SCAN_KEYFRAMES}</style>

<div class="center">
    <div class="clip">
        <div class="scan-y">
            <img class="scan-x" src="<!-- INSERT IMAGE URL HERE -->"/>
        </div>
    </div>
</div>"#
        )
    }
}

fn root_vars(anim: &Animation, layout: Layout) -> String {
    format!(
        r#"    :root {{
        --aspect-ratio: calc({w} / {h});
        --fps: {fps:?};
        --columns: {columns};
        --rows: {rows};
    }}
"#,
        w = anim.frame_width(),
        h = anim.frame_height(),
        fps = anim.fps(),
        columns = layout.columns,
        rows = layout.rows,
    )
}

const SCAN_KEYFRAMES: &str = r#"
    .scan-x {
        animation: scan-x calc(1s * var(--columns) / var(--fps)) steps(var(--columns)) infinite;
    }

    @keyframes scan-x {
        0% {
            transform: translateX(0);
        }
        100% {
            transform: translateX(-100%);
        }
    }

    .scan-y {
        animation: scan-y calc(1s * var(--columns) * var(--rows) / var(--fps)) steps(var(--rows)) infinite;
    }

    @keyframes scan-y {
        0% {
            transform: translateY(0);
        }
        100% {
            transform: translateY(-100%);
        }
    }
"#;

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
