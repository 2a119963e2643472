//! Page Models
//!
//! Static catalog shown on the landing page.

/// Carousel slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub image: &'static str,
}

impl Slide {
    pub fn alt_text(&self) -> String {
        format!("Pixel {}", self.id)
    }
}

/// Generation task card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTask {
    pub id: u32,
    pub task: &'static str,
    pub is_new: bool,
    pub image: &'static str,
    pub text: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide { id: 1, image: "/wan.jpeg" },
    Slide { id: 2, image: "/open.jpeg" },
];

pub const GENERATION_TASKS: &[GenerationTask] = &[
    GenerationTask {
        id: 1,
        task: "Image",
        is_new: true,
        image: "/image.png",
        text: "Generate Image with custom in flex and diamgram",
    },
    GenerationTask {
        id: 2,
        task: "Video",
        is_new: false,
        image: "/video.png",
        text: "Generate Video with custom in flex and diamgram",
    },
    GenerationTask {
        id: 3,
        task: "RealTime",
        is_new: false,
        image: "/realtime.png",
        text: "Generate RealTime with custom in flex and diamgram",
    },
    GenerationTask {
        id: 4,
        task: "Extractor",
        is_new: true,
        image: "/extractor.png",
        text: "Generate Extractor with custom in flex and diamgram",
    },
    GenerationTask {
        id: 5,
        task: "Edit",
        is_new: true,
        image: "/edit.png",
        text: "Generate Edit with custom in flex and diamgram",
    },
    GenerationTask {
        id: 6,
        task: "Video Lipsync",
        is_new: true,
        image: "/lipsync.png",
        text: "Generate Video Lipsync with custom in flex and diamgram",
    },
    GenerationTask {
        id: 7,
        task: "Motion Transfer",
        is_new: true,
        image: "/motion.png",
        text: "Generate Motion Transfer with custom in flex and diamgram",
    },
    GenerationTask {
        id: 8,
        task: "Train",
        is_new: false,
        image: "/brain.png",
        text: "Generate Train with custom in flex and diamgram",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SLIDES.len(), 2);
        assert_eq!(GENERATION_TASKS.len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let slide_ids: HashSet<u32> = SLIDES.iter().map(|s| s.id).collect();
        assert_eq!(slide_ids.len(), SLIDES.len());
        let task_ids: HashSet<u32> = GENERATION_TASKS.iter().map(|t| t.id).collect();
        assert_eq!(task_ids.len(), GENERATION_TASKS.len());
    }

    #[test]
    fn test_slide_alt_text() {
        assert_eq!(SLIDES[0].alt_text(), "Pixel 1");
        assert_eq!(SLIDES[1].alt_text(), "Pixel 2");
    }

    #[test]
    fn test_task_text_names_the_task() {
        for task in GENERATION_TASKS {
            assert!(task.text.starts_with(&format!("Generate {} ", task.task)));
        }
        let new_count = GENERATION_TASKS.iter().filter(|t| t.is_new).count();
        assert_eq!(new_count, 5);
    }
}
