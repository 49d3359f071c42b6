//! Built-in wallpaper style catalog.
//!
//! Each style carries a fixed suffix that is appended to the user's prompt
//! to bias the image model toward a visual style. The catalog is static and
//! ordered; the frontend renders it in this order.

use serde::Serialize;

/// A selectable wallpaper style
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt_suffix: &'static str,
}

/// All styles offered by the app, in display order
pub const WALLPAPER_STYLES: &[StyleDescriptor] = &[
    StyleDescriptor {
        id: "cinematic",
        label: "Cinematic",
        prompt_suffix: "cinematic lighting, photorealistic, 8k, highly detailed, dramatic atmosphere",
    },
    StyleDescriptor {
        id: "anime",
        label: "Anime",
        prompt_suffix: "anime style, studio ghibli inspired, vibrant colors, cel shaded, detailed background",
    },
    StyleDescriptor {
        id: "cyberpunk",
        label: "Cyberpunk",
        prompt_suffix: "cyberpunk city, neon lights, futuristic, high tech, rain, reflections, night time",
    },
    StyleDescriptor {
        id: "minimalist",
        label: "Minimalist",
        prompt_suffix: "minimalist, flat design, vector art, clean lines, pastel colors, simple",
    },
    StyleDescriptor {
        id: "nature",
        label: "Nature",
        prompt_suffix: "national geographic style, nature photography, breathtaking landscape, golden hour",
    },
    StyleDescriptor {
        id: "abstract",
        label: "Abstract",
        prompt_suffix: "abstract art, fluid shapes, gradient, 3d render, blender, glassmorphism",
    },
    StyleDescriptor {
        id: "fantasy",
        label: "Fantasy",
        prompt_suffix: "fantasy world, magical, ethereal, dreamlike, concept art, digital painting",
    },
    StyleDescriptor {
        id: "vaporwave",
        label: "Vaporwave",
        prompt_suffix: "vaporwave aesthetic, retro 80s, synthwave, purple and pink gradients, glitch art",
    },
];

/// Look up a style by id
pub fn find_style(id: &str) -> Option<&'static StyleDescriptor> {
    WALLPAPER_STYLES.iter().find(|style| style.id == id)
}

/// Build the final image prompt for a style.
///
/// A stale or unknown style id must not block generation, so it simply
/// appends nothing.
pub fn compose_prompt(prompt: &str, style_id: &str) -> String {
    match find_style(style_id) {
        Some(style) => format!("{}, {}", prompt, style.prompt_suffix),
        None => prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_style_known() {
        let style = find_style("cyberpunk").unwrap();
        assert_eq!(style.label, "Cyberpunk");
        assert!(style.prompt_suffix.contains("neon lights"));
    }

    #[test]
    fn test_find_style_unknown() {
        assert!(find_style("polka-dot").is_none());
    }

    #[test]
    fn test_compose_prompt_appends_suffix() {
        let prompt = compose_prompt("a cat on a roof", "cyberpunk");
        assert!(prompt.starts_with("a cat on a roof, "));
        assert!(prompt.ends_with("night time"));
    }

    #[test]
    fn test_compose_prompt_unknown_style_is_passthrough() {
        assert_eq!(compose_prompt("a cat on a roof", "polka-dot"), "a cat on a roof");
    }

    #[test]
    fn test_style_ids_are_unique() {
        for (i, a) in WALLPAPER_STYLES.iter().enumerate() {
            for b in &WALLPAPER_STYLES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_catalog_starts_with_default_style() {
        assert_eq!(WALLPAPER_STYLES[0].id, "cinematic");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn compose_prompt_always_preserves_the_prompt(
                prompt in ".{0,200}",
                style_index in 0..WALLPAPER_STYLES.len(),
            ) {
                let style = &WALLPAPER_STYLES[style_index];
                let composed = compose_prompt(&prompt, style.id);
                prop_assert!(composed.starts_with(&prompt));
                prop_assert!(composed.ends_with(style.prompt_suffix));
            }

            #[test]
            fn compose_prompt_unknown_style_never_alters_the_prompt(prompt in ".{0,200}") {
                prop_assert_eq!(compose_prompt(&prompt, "no-such-style"), prompt);
            }
        }
    }
}
