//! CSS classes for components.

use dioxus_core::{AttributeValue, prelude::*};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// A list of CSS classes applied to a component's root element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// Class names in insertion order, without duplicates.
    classes: SmallVec<[&'static str; 4]>,
}

impl Class {
    /// Creates a new instance from a whitespace-separated list of classes.
    #[inline]
    pub fn new(class: &'static str) -> Self {
        let mut list = Self::default();
        for class in class.split_whitespace() {
            list.add(class);
        }
        list
    }

    /// Adds a class to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: &'static str) {
        if !(class.is_empty() || self.contains(class)) {
            self.classes.push(class);
        }
    }

    /// Returns the list with the class added if `enabled` is `true`.
    #[inline]
    pub fn with(mut self, class: &'static str, enabled: bool) -> Self {
        if enabled {
            self.add(class);
        }
        self
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|&s| s == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a space-separated `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        match self.classes.as_slice() {
            [] => Cow::Borrowed(""),
            [class] => Cow::Borrowed(class),
            classes => Cow::Owned(classes.join(" ")),
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(classes: [&'static str; N]) -> Self {
        classes
            .into_iter()
            .fold(Self::default(), |list, class| list.with(class, true))
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}
