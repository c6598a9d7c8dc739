use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

/// Icon sizes that can be generated from a source image.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IconSize {
    /// 16x16 pixels.
    Px16,
    /// 32x32 pixels.
    Px32,
    /// 64x64 pixels.
    Px64,
    /// 128x128 pixels.
    Px128,
    /// 256x256 pixels.
    Px256,
    /// 512x512 pixels.
    Px512,
    /// 1024x1024 pixels.
    Px1024,
}

impl IconSize {
    /// Every size in the catalog, smallest first.  This is also the order in
    /// which sizes are offered for selection.
    pub const ALL: [IconSize; 7] = [
        IconSize::Px16,
        IconSize::Px32,
        IconSize::Px64,
        IconSize::Px128,
        IconSize::Px256,
        IconSize::Px512,
        IconSize::Px1024,
    ];

    /// Get the icon size with the given edge length in pixels, if any.
    ///
    /// # Examples
    /// ```
    /// use macos_icon_gen::IconSize;
    /// assert_eq!(IconSize::from_pixels(128), Some(IconSize::Px128));
    /// assert_eq!(IconSize::from_pixels(100), None);
    /// ```
    pub fn from_pixels(pixels: u32) -> Option<IconSize> {
        match pixels {
            16 => Some(IconSize::Px16),
            32 => Some(IconSize::Px32),
            64 => Some(IconSize::Px64),
            128 => Some(IconSize::Px128),
            256 => Some(IconSize::Px256),
            512 => Some(IconSize::Px512),
            1024 => Some(IconSize::Px1024),
            _ => None,
        }
    }

    /// Returns the edge length of this size, in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Px16 => 16,
            IconSize::Px32 => 32,
            IconSize::Px64 => 64,
            IconSize::Px128 => 128,
            IconSize::Px256 => 256,
            IconSize::Px512 => 512,
            IconSize::Px1024 => 1024,
        }
    }

    /// Returns the name of the file generated for this size.
    ///
    /// # Examples
    /// ```
    /// use macos_icon_gen::IconSize;
    /// assert_eq!(IconSize::Px64.file_name(), "icon_64.png");
    /// ```
    pub fn file_name(self) -> String {
        format!("icon_{}.png", self.pixels())
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        write!(out, "{0}x{0}", self.pixels())
    }
}

/// Accepts either a bare edge length (`"256"`) or a dimension label
/// (`"256x256"`).
impl FromStr for IconSize {
    type Err = IconError;

    fn from_str(input: &str) -> Result<IconSize, IconError> {
        let input = input.trim();
        let edge = match input.split_once(['x', 'X']) {
            Some((w, h)) if w == h => w,
            Some(_) => return Err(IconError::UnsupportedSize(input.to_string())),
            None => input,
        };
        edge.parse::<u32>()
            .ok()
            .and_then(IconSize::from_pixels)
            .ok_or_else(|| IconError::UnsupportedSize(input.to_string()))
    }
}

/// An ordered, duplicate-free, non-empty selection of icon sizes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolutionSet {
    sizes: Vec<IconSize>,
}

impl ResolutionSet {
    /// Builds a set from sizes in selection order.  Later duplicates are
    /// dropped.  Returns `EmptySelection` if no size remains.
    pub fn new<I: IntoIterator<Item = IconSize>>(sizes: I) -> Result<ResolutionSet, IconError> {
        let mut ordered: Vec<IconSize> = Vec::new();
        for size in sizes {
            if !ordered.contains(&size) {
                ordered.push(size);
            }
        }
        if ordered.is_empty() {
            return Err(IconError::EmptySelection);
        }
        Ok(ResolutionSet { sizes: ordered })
    }

    /// Selects every catalog size.
    pub fn all() -> ResolutionSet {
        ResolutionSet { sizes: IconSize::ALL.to_vec() }
    }

    /// Parses a comma separated list such as `"16,32,1024"`.
    pub fn parse_list(input: &str) -> Result<ResolutionSet, IconError> {
        let sizes = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(IconSize::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        ResolutionSet::new(sizes)
    }

    /// Returns the sizes in selection order.
    pub fn sizes(&self) -> &[IconSize] {
        &self.sizes
    }

    /// Returns the number of selected sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolutionSet {
    type Item = &'a IconSize;
    type IntoIter = std::slice::Iter<'a, IconSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}
