#![allow(dead_code)]

use std::cell::RefCell;

use phpdoc_tags::{Context, Description, DescriptionFactory};

/// One call made to a [`RecordingFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryCall {
    /// The body text handed to the factory, verbatim.
    pub body: String,
    /// The namespace of the forwarded context, when one was supplied.
    pub namespace: Option<String>,
}

/// Description factory double that records every call it receives and
/// otherwise parses like the passthrough factory (text kept verbatim).
#[derive(Debug, Default)]
pub struct RecordingFactory {
    calls: RefCell<Vec<FactoryCall>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<FactoryCall> {
        self.calls.borrow().clone()
    }

    pub fn was_invoked(&self) -> bool {
        !self.calls.borrow().is_empty()
    }
}

impl DescriptionFactory for RecordingFactory {
    fn parse(&self, body: &str, context: Option<&Context>) -> Description {
        self.calls.borrow_mut().push(FactoryCall {
            body: body.to_string(),
            namespace: context.map(|c| c.namespace().to_string()),
        });
        Description::new(body)
    }
}
