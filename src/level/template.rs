use crate::consts;
use crate::pixel::PixelPos;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// An immutable level description: the authorial state that a fresh
/// [`Level`][super::Level] working copy is rebuilt from on every (re)start.
///
/// Templates come from the built-in level data or from a Tiled-style JSON
/// document (see [`LevelTemplate::from_json`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LevelTemplate {
    pub(crate) name: String,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) tile_size: i32,
    pub(crate) floor: Vec<u8>,
    pub(crate) wall: Vec<u8>,
    pub(crate) fruit: Vec<u8>,
    pub(crate) gate_exit: Vec<u8>,
    pub(crate) spawn: PixelPos,
}

impl LevelTemplate {
    /// Read a level document from disk.  The file stem becomes the level's
    /// display name.
    pub(crate) fn load(path: &Path) -> Result<LevelTemplate, TemplateError> {
        let src = fs_err::read_to_string(path)?;
        let name = path.file_stem().map_or_else(
            || String::from("level"),
            |stem| stem.to_string_lossy().into_owned(),
        );
        LevelTemplate::from_json(name, &src)
    }

    /// Parse a Tiled-style JSON level document: grid metadata plus a list
    /// of layers matched by name.  The `floor`, `wall`, `fruit`, and
    /// `gate_exit` tile layers carry flat tile-code arrays; the
    /// `snake_spawn` object group carries the spawn pixel position.
    ///
    /// The format degrades rather than erroring where it can: a missing or
    /// short tile layer behaves as all-empty, and a missing spawn object
    /// falls back to [`DEFAULT_SPAWN`][consts::DEFAULT_SPAWN].  Only an
    /// unreadable document or an unusable grid is an error.
    pub(crate) fn from_json(name: String, src: &str) -> Result<LevelTemplate, TemplateError> {
        let doc = serde_json::from_str::<LevelDoc>(src)?;
        let width = u16::try_from(doc.width)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(TemplateError::Dimensions)?;
        let height = u16::try_from(doc.height)
            .ok()
            .filter(|&h| h > 0)
            .ok_or(TemplateError::Dimensions)?;
        let tile_size = i32::try_from(doc.tilewidth)
            .ok()
            .filter(|&t| t > 0 && doc.tileheight == doc.tilewidth)
            .ok_or(TemplateError::Dimensions)?;
        let cells = usize::from(width) * usize::from(height);
        let mut floor = Vec::new();
        let mut wall = Vec::new();
        let mut fruit = Vec::new();
        let mut gate_exit = Vec::new();
        let mut spawn = None;
        for layer in doc.layers {
            match (layer.name.as_str(), layer.kind.as_str()) {
                ("floor", "tilelayer") => floor = layer.data,
                ("wall", "tilelayer") => wall = layer.data,
                ("fruit", "tilelayer") => fruit = layer.data,
                ("gate_exit", "tilelayer") => gate_exit = layer.data,
                ("snake_spawn", "objectgroup") => {
                    spawn = layer
                        .objects
                        .first()
                        .map(|obj| PixelPos::new(px(obj.x), px(obj.y)));
                }
                _ => (),
            }
        }
        for layer in [&mut floor, &mut wall, &mut fruit, &mut gate_exit] {
            layer.resize(cells, 0);
        }
        Ok(LevelTemplate {
            name,
            width,
            height,
            tile_size,
            floor,
            wall,
            fruit,
            gate_exit,
            spawn: spawn.unwrap_or(consts::DEFAULT_SPAWN),
        })
    }
}

/// Truncate an object coordinate to whole pixels, the way the original
/// integer rectangles did.
#[allow(clippy::cast_possible_truncation)]
fn px(v: f64) -> i32 {
    v as i32
}

#[derive(Debug, Deserialize)]
struct LevelDoc {
    width: u32,
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    layers: Vec<LayerDoc>,
}

#[derive(Debug, Deserialize)]
struct LayerDoc {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Vec<u8>,
    #[serde(default)]
    objects: Vec<ObjectDoc>,
}

#[derive(Debug, Deserialize)]
struct ObjectDoc {
    x: f64,
    y: f64,
}

#[derive(Debug, Error)]
pub(crate) enum TemplateError {
    #[error("failed to read level file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse level document")]
    Parse(#[from] serde_json::Error),
    #[error("level document has unusable grid dimensions")]
    Dimensions,
}
