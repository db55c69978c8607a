// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit RGBA color.

/// A color with 8-bit red, green, blue, and alpha channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is fully opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba8(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba8(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgba8(255, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[inline]
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if the alpha channel is `255`.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}
