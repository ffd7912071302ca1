//! Slide content model.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Returned when a slide set would contain no slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySlideSet;

impl Display for EmptySlideSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide set must contain at least one slide")
    }
}

impl Error for EmptySlideSet {}

/// Fixed, non-empty ordered slide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    /// Builds a slide set, rejecting an empty sequence.
    pub fn new(slides: Vec<Slide>) -> Result<Self, EmptySlideSet> {
        if slides.is_empty() {
            return Err(EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Built-in four-slide demo content.
    pub fn demo() -> Self {
        Self {
            slides: vec![
                Slide::new(
                    "Слайд 1",
                    "Это первый слайд нашего кастомного слайдера. Он создан без использования сторонних библиотек.",
                ),
                Slide::new(
                    "Слайд 2",
                    "Второй слайд демонстрирует плавные переходы между изображениями или текстовыми блоками.",
                ),
                Slide::new(
                    "Слайд 3",
                    "Третий слайд показывает, как реализована навигация с помощью кнопок и точек.",
                ),
                Slide::new(
                    "Слайд 4",
                    "Четвертый слайд замыкает кольцо слайдера. При переходе вперед с этого слайда откроется первый.",
                ),
            ],
        }
    }

    /// Number of slides; always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptySlideSet, Slide, SlideSet};

    #[test]
    fn rejects_empty_sequence() {
        assert_eq!(SlideSet::new(Vec::new()), Err(EmptySlideSet));
    }

    #[test]
    fn demo_has_four_slides_in_order() {
        let demo = SlideSet::demo();
        assert_eq!(demo.len(), 4);
        assert!(!demo.is_empty());
        let titles: Vec<_> = demo.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Слайд 1", "Слайд 2", "Слайд 3", "Слайд 4"]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let set = SlideSet::new(vec![Slide::new("only", "one")]).unwrap();
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
    }
}
