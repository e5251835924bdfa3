// ABOUTME: Fixed-bucket histograms for calorie and cooking-time distributions
// ABOUTME: Boundary values always fall into the lower bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::LookupError;
use recipe_core::models::Recipe;
use serde::Serialize;

/// Bucket counts paired with their display labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    /// Bucket labels in display order
    pub labels: Vec<&'static str>,
    /// Recipe count per bucket, aligned with `labels`
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Largest bucket count, 0 when every bucket is empty
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(label, count)` pairs in display order
    pub fn bars(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.labels.iter().copied().zip(self.counts.iter().copied())
    }
}

/// Calorie buckets: `[0,200]`, `(200,400]`, `(400,600]`, `(600,800]`, `(800,∞)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieBucket {
    /// Up to and including 200 kcal
    UpTo200,
    /// Above 200, up to and including 400 kcal
    UpTo400,
    /// Above 400, up to and including 600 kcal
    UpTo600,
    /// Above 600, up to and including 800 kcal
    UpTo800,
    /// Above 800 kcal
    Over800,
}

impl CalorieBucket {
    /// All buckets in display order
    pub const ALL: [Self; 5] = [
        Self::UpTo200,
        Self::UpTo400,
        Self::UpTo600,
        Self::UpTo800,
        Self::Over800,
    ];

    /// Bucket holding `amount`
    #[must_use]
    pub fn classify(amount: f64) -> Self {
        if amount <= 200.0 {
            Self::UpTo200
        } else if amount <= 400.0 {
            Self::UpTo400
        } else if amount <= 600.0 {
            Self::UpTo600
        } else if amount <= 800.0 {
            Self::UpTo800
        } else {
            Self::Over800
        }
    }

    /// Position in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Chart label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo200 => "0-200",
            Self::UpTo400 => "201-400",
            Self::UpTo600 => "401-600",
            Self::UpTo800 => "601-800",
            Self::Over800 => "801+",
        }
    }
}

/// Cooking-time buckets in minutes: `[0,15]`, `(15,30]`, `(30,60]`, `(60,∞)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingTimeBucket {
    /// Up to and including 15 minutes
    UpTo15,
    /// Above 15, up to and including 30 minutes
    UpTo30,
    /// Above 30, up to and including 60 minutes
    UpTo60,
    /// Above 60 minutes
    Over60,
}

impl CookingTimeBucket {
    /// All buckets in display order
    pub const ALL: [Self; 4] = [Self::UpTo15, Self::UpTo30, Self::UpTo60, Self::Over60];

    /// Bucket holding `minutes`
    #[must_use]
    pub const fn classify(minutes: u32) -> Self {
        match minutes {
            0..=15 => Self::UpTo15,
            16..=30 => Self::UpTo30,
            31..=60 => Self::UpTo60,
            _ => Self::Over60,
        }
    }

    /// Position in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Chart label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo15 => "0-15",
            Self::UpTo30 => "16-30",
            Self::UpTo60 => "31-60",
            Self::Over60 => "60+",
        }
    }
}

/// Calorie distribution of `recipes`
///
/// # Errors
///
/// Returns `LookupError::MissingNutrient` if any recipe lacks a calorie entry
pub fn calorie_histogram<'a, I>(recipes: I) -> Result<Histogram, LookupError>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut counts = vec![0; CalorieBucket::ALL.len()];
    for recipe in recipes {
        counts[CalorieBucket::classify(recipe.calories()?).index()] += 1;
    }

    Ok(Histogram {
        labels: CalorieBucket::ALL.into_iter().map(CalorieBucket::label).collect(),
        counts,
    })
}

/// Cooking-time distribution of `recipes`
#[must_use]
pub fn cooking_time_histogram<'a, I>(recipes: I) -> Histogram
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut counts = vec![0; CookingTimeBucket::ALL.len()];
    for recipe in recipes {
        counts[CookingTimeBucket::classify(recipe.ready_in_minutes).index()] += 1;
    }

    Histogram {
        labels: CookingTimeBucket::ALL.into_iter().map(CookingTimeBucket::label).collect(),
        counts,
    }
}
