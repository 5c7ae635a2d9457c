//! Randomized word cloud placement with bounded collision retries
//!
//! Words are walked heaviest first. Each one gets a tier from its weight
//! relative to the heaviest word, a uniformly random anchor inside the
//! canvas, and is then moved until it no longer overlaps a committed label:
//! first by sliding down one line, and by jumping to a new random anchor
//! whenever the slide would leave the canvas. Labels larger than the canvas
//! are never committed.

use crate::io::configuration::{CLOUD_CUTOFF, DEFAULT_MAX_ATTEMPTS, GRID_CELL_SIZE};
use crate::io::error::{Result, TextCloudError, invalid_argument};
use crate::layout::canvas::{BoundingBox, Canvas, approximate_width, font_height};
use crate::layout::grid::SpatialIndex;
use crate::layout::tier::{Tier, TierLadder};
use crate::statistics::frequency::WeightedWord;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// What happens to a label whose collision retries run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionPolicy {
    /// Leave the label out of the cloud
    #[default]
    Drop,
    /// Commit the label at its last candidate position despite the overlap
    PlaceOverlapping,
}

/// Layout parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Placement bounds
    pub canvas: Canvas,
    /// Weight-to-style ladder
    pub tiers: TierLadder,
    /// Relative weight below which the walk stops
    pub cutoff: f64,
    /// Collision retries per label
    pub max_attempts: usize,
    /// Handling of labels that exhaust their retries
    pub policy: ExhaustionPolicy,
    /// Edge length of spatial index cells
    pub cell_size: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            tiers: TierLadder::default(),
            cutoff: CLOUD_CUTOFF,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: ExhaustionPolicy::default(),
            cell_size: GRID_CELL_SIZE,
        }
    }
}

/// A word committed at a canvas position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLabel {
    /// Word content
    pub text: String,
    /// Style the word is drawn with
    pub tier: Tier,
    /// Anchor x
    pub x: i32,
    /// Anchor y
    pub y: i32,
}

impl PlacedLabel {
    /// Approximate area covered by the label
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::for_label(&self.text, self.tier.font_size, self.x, self.y)
    }
}

/// Result of laying out one weighted word list
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    /// Committed labels in placement order
    pub labels: Vec<PlacedLabel>,
    /// Every tier of the ladder, heaviest first
    pub legend: Vec<Tier>,
    /// Words whose collision retries ran out
    pub exhausted: Vec<String>,
    /// Words whose label is wider or taller than the canvas
    pub out_of_bounds: Vec<String>,
}

impl LayoutOutcome {
    /// Number of labels that ran out of retries
    pub fn exhausted_count(&self) -> usize {
        self.exhausted.len()
    }

    /// Number of labels that could never fit the canvas
    pub fn out_of_bounds_count(&self) -> usize {
        self.out_of_bounds.len()
    }

    /// Whether every walked word found a free spot
    pub fn is_complete(&self) -> bool {
        self.exhausted.is_empty() && self.out_of_bounds.is_empty()
    }

    /// Reject layouts where any label ran out of retries or did not fit
    ///
    /// # Errors
    ///
    /// Returns [`TextCloudError::LayoutExhausted`] naming the exhausted words
    /// followed by the out-of-bounds ones
    pub fn into_complete(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            let mut words = self.exhausted;
            words.extend(self.out_of_bounds);
            Err(TextCloudError::LayoutExhausted { words })
        }
    }
}

enum Placement {
    Free(BoundingBox),
    Exhausted(BoundingBox),
}

/// Turns weighted words into non-overlapping labels
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine from validated parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the cutoff lies outside `[0, 1]`
    pub fn new(config: LayoutConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.cutoff) {
            return Err(invalid_argument(
                "cutoff",
                &config.cutoff,
                &"cutoff must lie in [0, 1]",
            ));
        }
        Ok(Self { config })
    }

    /// Active parameters
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out words with a generator seeded from `seed`
    ///
    /// # Errors
    ///
    /// See [`LayoutEngine::layout`]
    pub fn layout_seeded(&self, words: &[WeightedWord], seed: u64) -> Result<LayoutOutcome> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.layout(words, &mut rng)
    }

    /// Lay out words sorted by descending weight
    ///
    /// The walk stops at the first word whose weight relative to the first
    /// word is below the cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - The first weight is zero
    /// - The list is not sorted by descending weight
    pub fn layout<R: Rng>(&self, words: &[WeightedWord], rng: &mut R) -> Result<LayoutOutcome> {
        let first = words.first().ok_or_else(|| {
            invalid_argument("words", &0, &"cannot lay out an empty word list")
        })?;
        if first.weight == 0 {
            return Err(invalid_argument(
                "weight",
                &first.word,
                &"heaviest word must have a positive weight",
            ));
        }
        if words
            .windows(2)
            .any(|pair| matches!(pair, [a, b] if b.weight > a.weight))
        {
            return Err(invalid_argument(
                "words",
                &words.len(),
                &"words must be sorted by descending weight",
            ));
        }

        let max_weight = first.weight as f64;
        let mut index = SpatialIndex::new(&self.config.canvas, self.config.cell_size);
        let mut labels = Vec::new();
        let mut exhausted = Vec::new();
        let mut out_of_bounds = Vec::new();

        for word in words {
            let ratio = word.weight as f64 / max_weight;
            if ratio < self.config.cutoff {
                break;
            }

            let tier = self.config.tiers.classify(ratio);
            let width = approximate_width(&word.word, tier.font_size);
            if !self.config.canvas.fits(width, font_height(tier.font_size)) {
                out_of_bounds.push(word.word.clone());
                continue;
            }

            let bbox = match self.find_position(&word.word, tier.font_size, &index, rng) {
                Placement::Free(bbox) => bbox,
                Placement::Exhausted(bbox) => {
                    exhausted.push(word.word.clone());
                    if self.config.policy == ExhaustionPolicy::Drop {
                        continue;
                    }
                    bbox
                }
            };

            index.insert(bbox);
            labels.push(PlacedLabel {
                text: word.word.clone(),
                tier: tier.clone(),
                x: bbox.min[0],
                y: bbox.min[1],
            });
        }

        debug!(
            placed = labels.len(),
            exhausted = exhausted.len(),
            out_of_bounds = out_of_bounds.len(),
            candidates = words.len(),
            "layout_complete"
        );

        Ok(LayoutOutcome {
            labels,
            legend: self.config.tiers.tiers(),
            exhausted,
            out_of_bounds,
        })
    }

    fn find_position<R: Rng>(
        &self,
        text: &str,
        font_size: u32,
        index: &SpatialIndex,
        rng: &mut R,
    ) -> Placement {
        let canvas = &self.config.canvas;
        let mut candidate = self.random_box(text, font_size, rng);

        for _ in 0..self.config.max_attempts {
            if index.first_overlap(&candidate).is_none() {
                return Placement::Free(candidate);
            }

            let slid = BoundingBox::for_label(
                text,
                font_size,
                candidate.min[0],
                candidate.min[1].saturating_add(font_height(font_size)),
            );
            candidate = if canvas.contains_vertically(&slid) {
                slid
            } else {
                self.random_box(text, font_size, rng)
            };
        }

        if index.first_overlap(&candidate).is_none() {
            Placement::Free(candidate)
        } else {
            Placement::Exhausted(candidate)
        }
    }

    fn random_box<R: Rng>(&self, text: &str, font_size: u32, rng: &mut R) -> BoundingBox {
        let canvas = &self.config.canvas;
        let (min_x, max_x) = canvas.anchor_range_x(approximate_width(text, font_size));
        let (min_y, max_y) = canvas.anchor_range_y(font_height(font_size));
        let x = rng.random_range(min_x..=max_x);
        let y = rng.random_range(min_y..=max_y);
        BoundingBox::for_label(text, font_size, x, y)
    }
}
