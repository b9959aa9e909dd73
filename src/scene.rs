//! Scene files: annotation lists rendered by the command-line tool.
//!
//! ```toml
//! [[annotation]]
//! type = "label"
//! text = "NH2"
//! x = 10
//! y = 20
//!
//! [[annotation]]
//! type = "arrow"
//! tail = [0, 0]
//! head = [40, 10]
//! color = "red"
//! ```
//!
//! Omitted colors, thicknesses, and sizes come from the [`Config`].

use crate::config::{ColorSpec, Config};
use crate::draw::{Annotation, DrawingObject, Frame, GeometryError, Shape, TextLabel};
use crate::util::Rect;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One annotation as written in a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneEntry {
    Label {
        text: String,
        x: f64,
        y: f64,
        /// Explicit box size; measured from the text when omitted
        width: Option<f64>,
        height: Option<f64>,
        size: Option<f64>,
        color: Option<ColorSpec>,
        background: Option<ColorSpec>,
        #[serde(default)]
        selected: bool,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Option<ColorSpec>,
        thickness: Option<f64>,
        #[serde(default)]
        locked: bool,
        #[serde(default)]
        selected: bool,
    },
    Ellipse {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Option<ColorSpec>,
        thickness: Option<f64>,
        #[serde(default)]
        locked: bool,
        #[serde(default)]
        selected: bool,
    },
    Line {
        start: (f64, f64),
        end: (f64, f64),
        color: Option<ColorSpec>,
        thickness: Option<f64>,
        #[serde(default)]
        locked: bool,
        #[serde(default)]
        selected: bool,
    },
    Arrow {
        tail: (f64, f64),
        head: (f64, f64),
        head_length: Option<f64>,
        head_angle: Option<f64>,
        color: Option<ColorSpec>,
        thickness: Option<f64>,
        #[serde(default)]
        locked: bool,
        #[serde(default)]
        selected: bool,
    },
}

/// A parsed scene file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default, rename = "annotation")]
    pub annotations: Vec<SceneEntry>,
}

impl Scene {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse scene")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    /// Builds the annotations, filling unspecified style from `config`.
    ///
    /// # Errors
    /// Fails on the first entry with invalid geometry (e.g., negative size).
    pub fn build_frame(&self, config: &Config) -> Result<Frame, GeometryError> {
        let mut frame = Frame::new();
        for entry in &self.annotations {
            frame.add(entry.build(config)?);
        }
        log::debug!("Built frame with {} annotations", frame.len());
        Ok(frame)
    }
}

impl SceneEntry {
    fn build(&self, config: &Config) -> Result<Annotation, GeometryError> {
        let drawing = &config.drawing;
        let color_or_default = |color: &Option<ColorSpec>| {
            color
                .as_ref()
                .unwrap_or(&drawing.default_color)
                .to_color()
        };
        let thickness_or_default = |t: &Option<f64>| t.unwrap_or(drawing.default_thickness);

        let (mut annotation, selected): (Annotation, bool) = match self {
            SceneEntry::Label {
                text,
                x,
                y,
                width,
                height,
                size,
                color,
                background,
                selected,
            } => {
                let size = size.unwrap_or(drawing.default_font_size);
                let mut label = TextLabel::new(
                    text.clone(),
                    *x,
                    *y,
                    drawing.font_descriptor(),
                    size,
                    color_or_default(color),
                );
                if width.is_some() || height.is_some() {
                    let measured = label.bounding_rect();
                    label.set_rect(
                        *x,
                        *y,
                        width.unwrap_or(measured.width),
                        height.unwrap_or(measured.height),
                    )?;
                }
                let background = background
                    .as_ref()
                    .map(ColorSpec::to_color)
                    .or_else(|| drawing.label_background.then_some(crate::draw::WHITE));
                if let Some(bg) = background {
                    label = label.with_background(bg);
                }
                (label.into(), *selected)
            }
            SceneEntry::Rectangle {
                x,
                y,
                width,
                height,
                color,
                thickness,
                locked,
                selected,
            } => {
                let mut shape = Shape::rectangle(
                    Rect::default(),
                    color_or_default(color),
                    thickness_or_default(thickness),
                );
                shape.set_rect(*x, *y, *width, *height)?;
                shape.set_locked(*locked);
                (shape.into(), *selected)
            }
            SceneEntry::Ellipse {
                x,
                y,
                width,
                height,
                color,
                thickness,
                locked,
                selected,
            } => {
                let mut shape = Shape::ellipse(
                    Rect::default(),
                    color_or_default(color),
                    thickness_or_default(thickness),
                );
                shape.set_rect(*x, *y, *width, *height)?;
                shape.set_locked(*locked);
                (shape.into(), *selected)
            }
            SceneEntry::Line {
                start,
                end,
                color,
                thickness,
                locked,
                selected,
            } => {
                let mut shape = Shape::line(
                    *start,
                    *end,
                    color_or_default(color),
                    thickness_or_default(thickness),
                );
                shape.set_locked(*locked);
                (shape.into(), *selected)
            }
            SceneEntry::Arrow {
                tail,
                head,
                head_length,
                head_angle,
                color,
                thickness,
                locked,
                selected,
            } => {
                let mut shape = Shape::arrow(
                    *tail,
                    *head,
                    head_length.unwrap_or(config.arrow.head_length),
                    head_angle.unwrap_or(config.arrow.head_angle),
                    color_or_default(color),
                    thickness_or_default(thickness),
                );
                shape.set_locked(*locked);
                (shape.into(), *selected)
            }
        };

        annotation.set_selected(selected);
        Ok(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, ShapeKind};

    const SCENE: &str = r#"
[[annotation]]
type = "label"
text = "NH2"
x = 10
y = 20
width = 40
height = 15
color = "red"
selected = true

[[annotation]]
type = "rectangle"
x = 0
y = 0
width = 100
height = 50
locked = true

[[annotation]]
type = "arrow"
tail = [0, 0]
head = [40, 10]
thickness = 2.5
"#;

    #[test]
    fn parses_and_builds_with_config_defaults() {
        let scene = Scene::from_toml(SCENE).unwrap();
        assert_eq!(scene.annotations.len(), 3);

        let frame = scene.build_frame(&Config::default()).unwrap();
        assert_eq!(frame.len(), 3);

        let label = &frame.annotations[0];
        assert!(label.is_selected());
        assert_eq!(label.bounding_rect(), Rect::new(10.0, 20.0, 40.0, 15.0));
        match label {
            Annotation::Label(label) => {
                assert_eq!(label.color(), RED);
                assert_eq!(label.font_size(), 12.0);
            }
            other => panic!("expected label, got {other:?}"),
        }

        let rect = &frame.annotations[1];
        assert!(!rect.is_movable());
        assert_eq!(rect.bounding_rect(), Rect::new(0.0, 0.0, 100.0, 50.0));

        match &frame.annotations[2] {
            Annotation::Shape(shape) => {
                assert_eq!(shape.color, BLACK);
                assert_eq!(shape.thickness, 2.5);
                assert!(matches!(
                    shape.kind,
                    ShapeKind::Arrow {
                        head_length,
                        head_angle,
                        ..
                    } if head_length == 10.0 && head_angle == 30.0
                ));
            }
            other => panic!("expected shape, got {other:?}"),
        }
    }

    #[test]
    fn negative_sizes_are_rejected() {
        let scene = Scene::from_toml(
            r#"
[[annotation]]
type = "ellipse"
x = 0
y = 0
width = -10
height = 5
"#,
        )
        .unwrap();
        assert!(matches!(
            scene.build_frame(&Config::default()),
            Err(GeometryError::NegativeSize { .. })
        ));
    }

    #[test]
    fn unknown_types_fail_to_parse() {
        assert!(Scene::from_toml("[[annotation]]\ntype = \"hexagon\"\n").is_err());
    }

    #[test]
    fn empty_scene_is_valid() {
        let scene = Scene::from_toml("").unwrap();
        assert!(scene.build_frame(&Config::default()).unwrap().is_empty());
    }
}
