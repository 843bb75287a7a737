//! Static scoring configuration: the dimension weight table and the
//! vocabulary tables the fuzzy name/style fallbacks consult.
//!
//! These are data, not logic. Scorers read them; nothing writes them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Weights applied when combining [`crate::schema::FieldScores`] into one
/// overall score. Any weight may be zero to disable a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Object name weight.
    pub name: f64,
    /// Maker attribution weight.
    pub maker: f64,
    /// Era weight.
    pub era: f64,
    /// Style weight.
    pub style: f64,
    /// Category weight.
    pub category: f64,
    /// Domain routing weight.
    pub domain: f64,
    /// Origin region weight.
    pub origin: f64,
    /// Value estimate weight.
    pub value: f64,
    /// Required-feature weight.
    pub features: f64,
    /// Authentication-marker weight.
    pub markers: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name: 20.0,
            maker: 15.0,
            era: 12.0,
            style: 10.0,
            category: 8.0,
            domain: 5.0,
            origin: 5.0,
            value: 10.0,
            features: 10.0,
            markers: 5.0,
        }
    }
}

/// The fixed weight table used by the evaluation entry points.
pub static SCORE_WEIGHTS: Lazy<ScoreWeights> = Lazy::new(ScoreWeights::default);

/// Object-type terms checked for co-occurrence when name matching has
/// otherwise failed: two texts that at least agree the object is a "chair"
/// earn a floor score.
pub static OBJECT_TYPE_WORDS: &[&str] = &[
    "chair",
    "armchair",
    "rocker",
    "stool",
    "bench",
    "sofa",
    "settee",
    "chaise",
    "table",
    "desk",
    "sideboard",
    "buffet",
    "cabinet",
    "credenza",
    "dresser",
    "chest",
    "trunk",
    "wardrobe",
    "armoire",
    "bookcase",
    "shelf",
    "vase",
    "urn",
    "bowl",
    "plate",
    "platter",
    "teapot",
    "cup",
    "saucer",
    "pitcher",
    "jug",
    "bottle",
    "jar",
    "decanter",
    "lamp",
    "chandelier",
    "sconce",
    "candlestick",
    "clock",
    "watch",
    "barometer",
    "mirror",
    "frame",
    "painting",
    "print",
    "poster",
    "sculpture",
    "figurine",
    "bust",
    "rug",
    "tapestry",
    "quilt",
    "brooch",
    "necklace",
    "bracelet",
    "ring",
    "pendant",
    "camera",
    "radio",
    "phonograph",
    "typewriter",
    "telephone",
    "doll",
    "globe",
    "coin",
    "medal",
];

/// Material terms used as the last name-matching fallback: agreement on the
/// material alone is worth a token score.
pub static MATERIAL_WORDS: &[&str] = &[
    "oak",
    "walnut",
    "mahogany",
    "rosewood",
    "teak",
    "pine",
    "maple",
    "cherry",
    "ebony",
    "bamboo",
    "rattan",
    "wicker",
    "brass",
    "bronze",
    "copper",
    "silver",
    "gold",
    "pewter",
    "iron",
    "steel",
    "tin",
    "chrome",
    "porcelain",
    "ceramic",
    "stoneware",
    "earthenware",
    "pottery",
    "glass",
    "crystal",
    "enamel",
    "leather",
    "ivory",
    "bone",
    "horn",
    "marble",
    "alabaster",
    "jade",
    "amber",
    "bakelite",
    "celluloid",
    "velvet",
    "silk",
    "wool",
    "linen",
];

/// Style families and their synonyms.
///
/// A predicted style earns synonym credit when the expected style and the
/// prediction both mention the family base or any of its synonyms.
pub static STYLE_SYNONYMS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        ("art deco", vec!["deco", "machine age", "streamline moderne"]),
        ("art nouveau", vec!["nouveau", "jugendstil", "secession", "liberty style"]),
        (
            "mid-century modern",
            vec!["mid century", "midcentury", "danish modern", "scandinavian modern"],
        ),
        ("victorian", vec!["high victorian", "eastlake"]),
        ("edwardian", vec!["belle epoque"]),
        ("georgian", vec!["early georgian", "late georgian"]),
        ("regency", vec!["english regency"]),
        ("federal", vec!["american federal", "duncan phyfe"]),
        ("queen anne", vec!["queen anne revival"]),
        ("chippendale", vec!["chinese chippendale"]),
        ("sheraton", vec!["sheraton revival"]),
        ("arts and crafts", vec!["mission", "craftsman", "stickley"]),
        ("rococo", vec!["louis xv", "rocaille", "rococo revival"]),
        ("baroque", vec!["louis xiv"]),
        ("neoclassical", vec!["louis xvi", "empire", "classical revival", "biedermeier"]),
        ("gothic revival", vec!["neo gothic", "gothic"]),
        ("renaissance revival", vec!["neo renaissance"]),
        ("bauhaus", vec!["international style", "modernist"]),
        ("shaker", vec!["shaker style"]),
        ("primitive", vec!["folk art", "rustic", "country"]),
    ]
});
