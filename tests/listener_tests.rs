use std::cell::RefCell;
use std::rc::Rc;

use carousel_rs::CarouselError;
use carousel_rs::api::{CarouselConfig, CarouselEngine};
use carousel_rs::core::{CarouselMode, FixedLayout};
use carousel_rs::extensions::{CarouselContext, CarouselEvent, CarouselListener};
use carousel_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingListener {
    id: String,
    events: Rc<RefCell<Vec<(CarouselEvent, CarouselContext)>>>,
}

impl RecordingListener {
    fn new(
        id: impl Into<String>,
        events: Rc<RefCell<Vec<(CarouselEvent, CarouselContext)>>>,
    ) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl CarouselListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: CarouselEvent, context: CarouselContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn build_engine(mode: CarouselMode, index: usize) -> CarouselEngine<NullRenderer, FixedLayout> {
    let config = CarouselConfig::default().with_mode(mode).with_index(index);
    CarouselEngine::new(
        NullRenderer::default(),
        FixedLayout::uniform(300.0, 100.0, 5),
        config,
    )
}

fn event_names(events: &Rc<RefCell<Vec<(CarouselEvent, CarouselContext)>>>) -> Vec<&'static str> {
    events.borrow().iter().map(|(event, _)| event.name()).collect()
}

#[test]
fn next_emits_next_then_translate() {
    let mut engine = build_engine(CarouselMode::Continuous, 0);
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.handle_next();

    assert_eq!(event_names(&events), vec!["carousel-next", "carousel-translate"]);
    let recorded = events.borrow();
    assert_eq!(recorded[0].1.index, 0);
    assert_eq!(recorded[1].1.index, 2);
    assert_eq!(recorded[1].1.total_items, 5);
}

#[test]
fn next_at_end_still_emits_next() {
    let mut engine = build_engine(CarouselMode::Discrete, 4);
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.handle_next();

    assert_eq!(engine.index(), 4);
    assert_eq!(event_names(&events), vec!["carousel-next"]);
}

#[test]
fn prev_at_start_still_emits_prev() {
    let mut engine = build_engine(CarouselMode::Continuous, 0);
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.handle_prev();
    engine.handle_prev();

    assert_eq!(engine.index(), 0);
    assert_eq!(event_names(&events), vec!["carousel-prev", "carousel-prev"]);
}

#[test]
fn ignored_slide_emits_nothing() {
    let mut engine = build_engine(CarouselMode::Continuous, 0);
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.set_index(17);

    assert!(events.borrow().is_empty());
}

#[test]
fn listener_registry_rejects_empty_and_duplicate_ids() {
    let mut engine = build_engine(CarouselMode::Continuous, 0);
    let events = Rc::new(RefCell::new(Vec::new()));

    let err = engine
        .register_listener(Box::new(RecordingListener::new("", events.clone())))
        .expect_err("empty id must fail");
    assert!(matches!(err, CarouselError::InvalidListener(_)));

    engine
        .register_listener(Box::new(RecordingListener::new("a", events.clone())))
        .expect("register first");
    let err = engine
        .register_listener(Box::new(RecordingListener::new("a", events.clone())))
        .expect_err("duplicate id must fail");
    assert!(matches!(err, CarouselError::DuplicateListener(id) if id == "a"));

    assert_eq!(engine.listener_count(), 1);
    assert!(engine.has_listener("a"));
    assert!(engine.unregister_listener("a"));
    assert!(!engine.unregister_listener("a"));
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn every_listener_sees_every_event() {
    let mut engine = build_engine(CarouselMode::Discrete, 0);
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("first", first.clone())))
        .expect("register first");
    engine
        .register_listener(Box::new(RecordingListener::new("second", second.clone())))
        .expect("register second");

    engine.handle_next();

    assert_eq!(event_names(&first), event_names(&second));
    assert_eq!(first.borrow().len(), 2);
}

#[test]
fn stalled_next_emits_only_the_next_event() {
    let mut engine = CarouselEngine::new(
        NullRenderer::default(),
        FixedLayout::new(300.0, vec![500.0, 100.0, 100.0]),
        CarouselConfig::default().with_mode(CarouselMode::Continuous),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_listener(Box::new(RecordingListener::new("recorder", events.clone())))
        .expect("register listener");

    engine.handle_next();

    assert_eq!(engine.index(), 0);
    assert_eq!(event_names(&events), vec!["carousel-next"]);
}
