// Registration consistency rules.
//
// Purpose
// - Merge a submitted course selection into a student's registered set.
// - Enforce the per (level, semester) unit cap over the merged set.
//
// Boundaries
// - Pure. The caller resolves codes through the catalog first and persists the result.

use crate::modules::catalog::core::course::{Bucket, Course};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::str::FromStr;
use thiserror::Error;

pub const UNIT_CAP: u32 = 24;

/// What to do with submitted codes the catalog does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownCoursePolicy {
    #[default]
    Ignore,
    Reject,
}

impl FromStr for UnknownCoursePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected `ignore` or `reject`, got `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Cannot register. Total units for {bucket} ({total}) exceeds {cap}.", cap = UNIT_CAP)]
    UnitCapExceeded { bucket: Bucket, total: u32 },

    #[error("Unknown course codes: {}", .codes.join(", "))]
    UnknownCourses { codes: Vec<String> },
}

pub trait CourseLookup {
    fn lookup(&self, code: &str) -> Option<&Course>;
}

impl CourseLookup for HashMap<String, Course> {
    fn lookup(&self, code: &str) -> Option<&Course> {
        self.get(code)
    }
}

pub fn index_by_code(courses: Vec<Course>) -> HashMap<String, Course> {
    courses
        .into_iter()
        .map(|course| (course.code.clone(), course))
        .collect()
}

/// Unit totals per bucket for the codes the catalog can resolve.
pub fn bucket_totals(
    codes: &BTreeSet<String>,
    catalog: &impl CourseLookup,
) -> BTreeMap<Bucket, u32> {
    let mut totals = BTreeMap::new();
    for course in codes.iter().filter_map(|code| catalog.lookup(code)) {
        *totals.entry(course.bucket()).or_insert(0) += course.units;
    }
    totals
}

/// Union `submitted` into `existing` and validate every bucket of the result.
///
/// A submission that adds nothing new returns `existing` untouched, so
/// re-registering can never fail on its own. Buckets are checked in ascending
/// order; the first one over [`UNIT_CAP`] is reported.
pub fn merge_registration(
    existing: &BTreeSet<String>,
    submitted: &BTreeSet<String>,
    catalog: &impl CourseLookup,
    policy: UnknownCoursePolicy,
) -> Result<BTreeSet<String>, RegistrationError> {
    if submitted.is_subset(existing) {
        return Ok(existing.clone());
    }

    if policy == UnknownCoursePolicy::Reject {
        let codes: Vec<String> = submitted
            .iter()
            .filter(|code| catalog.lookup(code).is_none())
            .cloned()
            .collect();
        if !codes.is_empty() {
            return Err(RegistrationError::UnknownCourses { codes });
        }
    }

    let merged: BTreeSet<String> = existing.union(submitted).cloned().collect();
    if let Some((bucket, total)) = bucket_totals(&merged, catalog)
        .into_iter()
        .find(|(_, total)| *total > UNIT_CAP)
    {
        return Err(RegistrationError::UnitCapExceeded { bucket, total });
    }
    Ok(merged)
}
