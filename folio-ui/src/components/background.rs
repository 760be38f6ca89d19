//! Decorative background scene
//!
//! Mounted once by the root component. Every motion here loops forever as a
//! CSS animation, so nothing needs tearing down until the page itself goes.

use dioxus::prelude::*;
use folio_common::animation::presets;

const GRID_CELLS: usize = 100;
const LINES: usize = 3;
const DOTS: usize = 5;

/// Inline style for decorative line `i`
pub(crate) fn line_style(i: usize) -> String {
    format!(
        "top: {}%; left: 5%; width: {}%; transform: rotate({}deg); transform-origin: left center; {}",
        15 + i * 25,
        30 + i * 10,
        i * 15,
        presets::line(i).style(true),
    )
}

/// Inline style for floating dot `i`
pub(crate) fn dot_style(i: usize) -> String {
    let size = 20 + i * 5;
    format!(
        "top: {}%; left: {}%; width: {size}px; height: {size}px; {}",
        15 + i * 10,
        5 + i * 15,
        presets::float(i).style(true),
    )
}

pub(crate) fn dot_color(i: usize) -> &'static str {
    match i % 3 {
        0 => "bg-blue-400",
        1 => "bg-purple-400",
        _ => "bg-pink-400",
    }
}

#[component]
pub fn BackgroundScene() -> Element {
    rsx! {
        // Pulsing grid
        div { class: "fixed inset-0 -z-20 opacity-10 pointer-events-none",
            div { class: "absolute inset-0 grid grid-cols-10 grid-rows-10 gap-2",
                for i in 0..GRID_CELLS {
                    div {
                        key: "{i}",
                        class: "bg-blue-300 rounded-sm",
                        style: "opacity: 0.3; {presets::grid_cell(i).style(true)}",
                    }
                }
            }
        }

        div { class: "fixed top-0 left-0 w-full h-full -z-10 overflow-hidden pointer-events-none",
            div {
                class: "absolute top-20 left-[10%] w-40 h-40 rounded-full bg-gradient-to-br from-blue-400 to-purple-500 opacity-80 shadow-2xl",
                style: "transform-style: preserve-3d; {presets::SPHERE.style(true)}",
            }
            div {
                class: "absolute bottom-20 right-[10%] w-32 h-32 bg-gradient-to-br from-yellow-300 to-pink-400 opacity-80 shadow-2xl",
                style: "transform-style: preserve-3d; border-radius: 15px; {presets::CUBE.style(true)}",
            }
            div {
                class: "absolute top-1/3 right-1/4 w-24 h-24 bg-gradient-to-br from-green-400 to-teal-500 opacity-80 shadow-2xl",
                style: "transform-style: preserve-3d; clip-path: polygon(50% 0%, 0% 100%, 100% 100%); {presets::PYRAMID.style(true)}",
            }
            div {
                class: "absolute bottom-1/3 left-1/4 w-28 h-28 bg-gradient-to-br from-red-400 to-orange-500 opacity-80 shadow-2xl",
                style: "transform-style: preserve-3d; border-radius: 50% / 10%; {presets::TORUS.style(true)}",
            }

            for i in 0..LINES {
                div {
                    key: "line-{i}",
                    class: "absolute h-1 bg-gradient-to-r from-blue-400 to-purple-500 opacity-60",
                    style: line_style(i),
                }
            }

            for i in 0..DOTS {
                div {
                    key: "dot-{i}",
                    class: "absolute rounded-full opacity-60 {dot_color(i)}",
                    style: dot_style(i),
                }
            }

            div {
                class: "absolute top-[10%] left-[5%] w-72 h-72 bg-blue-200 rounded-full filter blur-3xl opacity-40",
                style: presets::BLOB_A.style(true),
            }
            div {
                class: "absolute bottom-[10%] right-[5%] w-96 h-96 bg-purple-200 rounded-full filter blur-3xl opacity-40",
                style: presets::BLOB_B.style(true),
            }
            div { class: "absolute top-1/2 left-1/4 w-48 h-48 bg-yellow-200 rounded-full filter blur-3xl opacity-30 animate-pulse" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_geometry() {
        let style = line_style(2);
        assert!(style.starts_with("top: 65%; left: 5%; width: 50%; transform: rotate(30deg);"));
        assert!(style.contains("stretch-x"));
    }

    #[test]
    fn test_dot_geometry() {
        let style = dot_style(1);
        assert!(style.starts_with("top: 25%; left: 20%; width: 25px; height: 25px;"));
        assert!(style.contains("float-down"));
    }

    #[test]
    fn test_dot_colors_cycle() {
        let colors: Vec<_> = (0..DOTS).map(dot_color).collect();
        assert_eq!(
            colors,
            vec!["bg-blue-400", "bg-purple-400", "bg-pink-400", "bg-blue-400", "bg-purple-400"]
        );
    }
}
