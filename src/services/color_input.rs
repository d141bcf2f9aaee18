use color_model::{ColorModel, Rgb, MAX_STEPS, MIN_STEPS};
use serde::Deserialize;

use crate::error::InputError;

/// Color text as supplied by a caller: up to one string per notation.
///
/// Each string may hold a single color or a `;`-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColorInput {
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub rgb: Option<String>,
    #[serde(default)]
    pub hsl: Option<String>,
    #[serde(default)]
    pub cmyk: Option<String>,
}

impl ColorInput {
    /// Input holding a single notation.
    pub fn of(model: ColorModel, value: impl Into<String>) -> Self {
        Self::default().with(model, value)
    }

    /// Set the string for `model`, replacing any previous one.
    pub fn with(mut self, model: ColorModel, value: impl Into<String>) -> Self {
        *self.slot_mut(model) = Some(value.into());
        self
    }

    pub fn get(&self, model: ColorModel) -> Option<&str> {
        match model {
            ColorModel::Hex => self.hex.as_deref(),
            ColorModel::Rgb => self.rgb.as_deref(),
            ColorModel::Hsl => self.hsl.as_deref(),
            ColorModel::Cmyk => self.cmyk.as_deref(),
        }
    }

    fn slot_mut(&mut self, model: ColorModel) -> &mut Option<String> {
        match model {
            ColorModel::Hex => &mut self.hex,
            ColorModel::Rgb => &mut self.rgb,
            ColorModel::Hsl => &mut self.hsl,
            ColorModel::Cmyk => &mut self.cmyk,
        }
    }

    /// Non-blank notations in hex, rgb, hsl, cmyk order.
    fn provided(&self) -> impl Iterator<Item = (ColorModel, &str)> {
        ColorModel::ALL.into_iter().filter_map(move |model| {
            self.get(model)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (model, value))
        })
    }

    /// Exactly one notation holding exactly one color. Blank strings count
    /// as absent.
    pub fn single(&self) -> Result<Rgb, InputError> {
        let mut provided = self.provided();
        let (model, value) = provided.next().ok_or(InputError::NoColors)?;
        let extra = provided.count();
        if extra > 0 {
            return Err(InputError::MultipleInputs { found: extra + 1 });
        }
        model
            .parse(value)
            .map_err(|source| InputError::Parse { model, source })
    }

    /// Every supplied list, concatenated in hex, rgb, hsl, cmyk order.
    ///
    /// Blank strings are ignored. More than `max` colors is an error, not a
    /// truncation.
    pub fn collect(&self, max: usize) -> Result<Vec<Rgb>, InputError> {
        let mut colors = Vec::new();
        for (model, value) in self.provided() {
            let parsed = model
                .parse_list(value)
                .map_err(|source| InputError::Parse { model, source })?;
            colors.extend(parsed);
        }

        if colors.is_empty() {
            return Err(InputError::NoColors);
        }
        if colors.len() > max {
            return Err(InputError::TooManyColors {
                max,
                found: colors.len(),
            });
        }
        Ok(colors)
    }

    /// Like [`collect`](Self::collect), also requiring at least `min` colors.
    pub fn collect_between(&self, min: usize, max: usize) -> Result<Vec<Rgb>, InputError> {
        let colors = self.collect(max)?;
        if colors.len() < min {
            return Err(InputError::TooFewColors {
                min,
                found: colors.len(),
            });
        }
        Ok(colors)
    }
}

/// Check a ramp length requested by a caller.
pub fn validate_amount(amount: usize) -> Result<usize, InputError> {
    if (MIN_STEPS..=MAX_STEPS).contains(&amount) {
        Ok(amount)
    } else {
        Err(InputError::AmountOutOfRange {
            amount,
            min: MIN_STEPS,
            max: MAX_STEPS,
        })
    }
}
