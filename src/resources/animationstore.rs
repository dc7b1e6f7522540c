//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and query it with the entity's elapsed time.
//!
//! Three constructors mirror how sprites are authored:
//! - [`AnimationResource::from_files`] – one image per frame
//! - [`AnimationResource::from_sheet`] – a sprite sheet cut into `rows × cols` frames
//! - [`AnimationResource::single`] – a still image

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::geometry::Rect;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.animations.contains_key(key)
    }
}

/// One drawable frame: a region of a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Texture key the host renderer resolves.
    pub tex_key: Arc<str>,
    /// Source rectangle inside the texture, in pixels.
    pub region: Rect,
}

impl Frame {
    pub fn width(&self) -> f32 {
        self.region.width
    }

    pub fn height(&self) -> f32 {
        self.region.height
    }
}

/// Immutable data describing a frame sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    pub frames: Vec<Frame>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// One frame per image. All images are `width × height`.
    pub fn from_files<S: AsRef<str>>(
        files: &[S],
        width: f32,
        height: f32,
        frame_duration: f32,
        looped: bool,
    ) -> Self {
        let frames = files
            .iter()
            .map(|file| Frame {
                tex_key: Arc::from(file.as_ref()),
                region: Rect::new(0.0, 0.0, width, height),
            })
            .collect();
        Self {
            frames,
            frame_duration,
            looped,
        }
    }

    /// Cut a `sheet_width × sheet_height` sheet into `rows × cols` equal
    /// frames, row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn from_sheet(
        file: &str,
        sheet_width: f32,
        sheet_height: f32,
        rows: usize,
        cols: usize,
        frame_duration: f32,
        looped: bool,
    ) -> Self {
        let tex_key: Arc<str> = Arc::from(file);
        let rows = rows.max(1);
        let cols = cols.max(1);
        let w = sheet_width / cols as f32;
        let h = sheet_height / rows as f32;
        let frames = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| Frame {
                tex_key: Arc::clone(&tex_key),
                region: Rect::new(c as f32 * w, r as f32 * h, w, h),
            })
            .collect();
        Self {
            frames,
            frame_duration,
            looped,
        }
    }

    /// A still image, modelled as a looping one-frame animation.
    pub fn single(file: &str, width: f32, height: f32) -> Self {
        Self::from_files(&[file], width, height, 1.0, true)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn raw_index(&self, elapsed: f32) -> usize {
        if self.frame_duration <= 0.0 {
            return 0;
        }
        (elapsed.max(0.0) / self.frame_duration).floor() as usize
    }

    /// Frame shown `elapsed` seconds into playback.
    pub fn key_frame(&self, elapsed: f32) -> Option<&Frame> {
        let count = self.frames.len();
        if count == 0 {
            return None;
        }
        let index = self.raw_index(elapsed);
        let index = if self.looped {
            index % count
        } else {
            index.min(count - 1)
        };
        self.frames.get(index)
    }

    /// True once a non-looping animation has played past its last frame.
    pub fn is_finished(&self, elapsed: f32) -> bool {
        if self.looped {
            return false;
        }
        self.raw_index(elapsed) + 1 > self.frames.len()
    }

    /// Width and height of the first frame.
    pub fn frame_size(&self) -> Option<(f32, f32)> {
        self.frames.first().map(|f| (f.width(), f.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turtle() -> AnimationResource {
        let files: Vec<String> = (1..=6).map(|i| format!("turtle-{}.png", i)).collect();
        AnimationResource::from_files(&files, 64.0, 64.0, 0.125, true)
    }

    #[test]
    fn test_from_files_frame_order() {
        let anim = turtle();
        assert_eq!(anim.frame_count(), 6);
        assert_eq!(&*anim.frames[2].tex_key, "turtle-3.png");
        assert_eq!(anim.frame_size(), Some((64.0, 64.0)));
    }

    #[test]
    fn test_looped_key_frame_wraps() {
        let anim = turtle();
        let first = anim.key_frame(0.0).map(|f| f.tex_key.to_string());
        assert_eq!(first.as_deref(), Some("turtle-1.png"));
        let frame = anim.key_frame(0.125 * 7.0).map(|f| f.tex_key.to_string());
        assert_eq!(frame.as_deref(), Some("turtle-2.png"));
        assert!(!anim.is_finished(100.0));
    }

    #[test]
    fn test_sheet_row_major_and_finish() {
        let anim = AnimationResource::from_sheet("whirlpool.png", 640.0, 128.0, 2, 5, 0.125, false);
        assert_eq!(anim.frame_count(), 10);
        assert_eq!(anim.frames[5].region, Rect::new(0.0, 64.0, 128.0, 64.0));
        assert_eq!(anim.frames[4].region, Rect::new(512.0, 0.0, 128.0, 64.0));

        let last = anim.key_frame(100.0).map(|f| f.region);
        assert_eq!(last, Some(anim.frames[9].region));
        assert!(!anim.is_finished(0.125 * 9.5));
        assert!(anim.is_finished(0.125 * 10.0));
    }

    #[test]
    fn test_single_never_finishes() {
        let anim = AnimationResource::single("rock.png", 64.0, 64.0);
        assert_eq!(anim.frame_count(), 1);
        assert!(!anim.is_finished(1000.0));
        assert!(anim.key_frame(1000.0).is_some());
    }
}
