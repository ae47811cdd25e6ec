use crate::models::problem::Point;
use crate::models::solution::Tour;
use crate::utils::{create_silent_logger, InfoLogger};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub type LogMessages = Rc<RefCell<Vec<String>>>;

/// Creates a tour with given points appended in their order.
pub fn test_tour<P: Point>(points: &[P]) -> Tour<P> {
    let mut tour = Tour::new_with_logger("test", create_silent_logger());
    points.iter().cloned().for_each(|point| tour.append(point).expect("unexpected duplicate"));

    tour
}

/// Creates a logger which keeps all messages in memory.
pub fn create_collecting_logger() -> (InfoLogger, LogMessages) {
    let messages = LogMessages::default();
    let sink = messages.clone();

    (Arc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string())), messages)
}
