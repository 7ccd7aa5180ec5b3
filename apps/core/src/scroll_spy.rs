use std::time::{Duration, Instant};

pub const TOP_THRESHOLD: f64 = 100.0;
pub const BOTTOM_MARGIN: f64 = 100.0;
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(100);

/// Vertical extent of one navigable section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl Section {
    pub fn new(id: &str, top: f64, bottom: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
            bottom,
        }
    }
}

/// Maps a scroll offset to the active section id.
///
/// Near the top of the page the first section wins outright. Otherwise the
/// first section whose band `[top - viewport/3, bottom - 100)` contains the
/// offset wins; when no band matches, the previous active id is retained so
/// the highlight never flickers to nothing.
pub fn classify<'a>(
    sections: &'a [Section],
    scroll_offset: f64,
    viewport_height: f64,
    previous: Option<&'a str>,
) -> Option<&'a str> {
    let Some(first) = sections.first() else {
        return previous;
    };

    if scroll_offset < TOP_THRESHOLD {
        return Some(first.id.as_str());
    }

    for section in sections {
        let upper = section.top - viewport_height / 3.0;
        let lower = section.bottom - BOTTOM_MARGIN;
        if scroll_offset >= upper && scroll_offset < lower {
            return Some(section.id.as_str());
        }
    }

    previous
}

/// Leading-edge throttle: the first call passes, further calls inside the
/// interval are dropped.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Stateful tracker tying the classifier to a 100ms scroll throttle.
pub struct ScrollSpy {
    sections: Vec<Section>,
    active: Option<String>,
    throttle: Throttle,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            active: None,
            throttle: Throttle::new(THROTTLE_INTERVAL),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Scroll event entry point; timestamps are passed in so tests never sleep.
    pub fn on_scroll(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        now: Instant,
    ) -> Option<&str> {
        if !self.throttle.allow(now) {
            return self.active.as_deref();
        }
        self.apply(scroll_offset, viewport_height)
    }

    /// Section layout changed; reclassify immediately, bypassing the throttle.
    pub fn set_sections(
        &mut self,
        sections: Vec<Section>,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> Option<&str> {
        self.sections = sections;
        self.apply(scroll_offset, viewport_height)
    }

    fn apply(&mut self, scroll_offset: f64, viewport_height: f64) -> Option<&str> {
        let next = classify(
            &self.sections,
            scroll_offset,
            viewport_height,
            self.active.as_deref(),
        )
        .map(str::to_string);
        self.active = next;
        self.active.as_deref()
    }
}
