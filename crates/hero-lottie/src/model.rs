use serde::{Deserialize, Deserializer, Serialize};

/// Top-level Lottie document, reduced to the fields playback control needs.
///
/// Shape, layer and asset data are opaque to this crate: the rasterizer that
/// consumes them sits on the other side of the host boundary. What matters
/// here is the frame range (`ip`/`op`), the frame rate and the marker table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LottieJson {
    pub v: Option<String>,
    pub ip: f32,
    pub op: f32,
    pub fr: f32,
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub nm: Option<String>,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl LottieJson {
    /// Number of addressable frames, matching lottie-web's `totalFrames`.
    pub fn total_frames(&self) -> f32 {
        (self.op - self.ip).max(0.0)
    }

    /// The last addressable frame index.
    pub fn last_frame(&self) -> f32 {
        (self.total_frames() - 1.0).max(0.0)
    }

    /// Looks up a marker by display name.
    ///
    /// Authoring tools disagree on where the name lives: newer exports carry a
    /// structured `payload.name`, older ones put the plain name in the `cm`
    /// comment field. Both are accepted, `payload` winning when present.
    pub fn find_marker(&self, name: &str) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| m.display_name() == Some(name))
    }
}

/// A named, authored point on the animation timeline.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Marker {
    /// Comment / short code field. Some exporters serialize a JSON object
    /// into this string instead of a plain name.
    #[serde(default, deserialize_with = "deserialize_comment")]
    pub cm: Option<String>,
    /// Start frame.
    pub tm: f32,
    /// Duration in frames.
    #[serde(default)]
    pub dr: f32,
    /// Structured payload, when the exporter provides one.
    #[serde(default)]
    pub payload: Option<MarkerPayload>,
}

impl Marker {
    /// The marker's display name: `payload.name` when present, otherwise the
    /// raw `cm` code.
    pub fn display_name(&self) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .or(self.cm.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MarkerPayload {
    #[serde(default)]
    pub name: Option<String>,
}

/// Accepts both plain strings and the occasional non-string junk some
/// exporters leave in `cm` (numbers, nulls). Junk collapses to `None` rather
/// than failing the whole document.
fn deserialize_comment<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
