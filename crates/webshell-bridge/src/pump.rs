//! Main-loop side of the event queue.
//!
//! [`EventPump::pump`] is called from the UI thread. It drains everything
//! queued so far, one event at a time, so a pipe script never runs in the
//! middle of a host call and scripts run in the order they were queued.

use std::sync::mpsc::TryRecvError;

use tracing::{debug, error, warn};

use crate::dispatcher::Dispatcher;
use crate::events::{BridgeEvent, EventReceiver};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("script evaluation failed: {0}")]
pub struct ScriptError(pub String);

/// Something that can run script in a page. Only touched from the UI thread.
pub trait ScriptTarget {
    fn evaluate_script(&self, js: &str) -> Result<(), ScriptError>;
}

pub struct EventPump<C> {
    dispatcher: Dispatcher<C>,
    rx: EventReceiver,
}

impl<C> EventPump<C> {
    pub fn new(dispatcher: Dispatcher<C>, rx: EventReceiver) -> Self {
        Self { dispatcher, rx }
    }

    /// Process every queued event.
    ///
    /// Calls and scripts are handled here; page lifecycle events are
    /// returned to the caller in arrival order.
    pub fn pump(&self, ctx: &mut C, target: &dyn ScriptTarget) -> Vec<BridgeEvent> {
        let mut lifecycle = Vec::new();

        loop {
            let event = match self.rx.try_recv() {
                Ok(e) => e,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("event queue disconnected");
                    break;
                }
            };

            match event {
                BridgeEvent::Call(call) => match self.dispatcher.dispatch(ctx, &call) {
                    Ok(Some(script)) => run_script(target, &script),
                    Ok(None) => {}
                    Err(e) => error!("{e}"),
                },
                BridgeEvent::Script(script) => run_script(target, &script),
                other => lifecycle.push(other),
            }
        }

        lifecycle
    }
}

fn run_script(target: &dyn ScriptTarget, script: &str) {
    if let Err(e) = target.evaluate_script(script) {
        warn!(len = script.len(), error = %e, "failed to evaluate script");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CallDescriptor;
    use crate::dispatcher::{arg, HostRegistry};
    use crate::events::{event_channel, PageLoadState};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;

    /// Timeline shared by the host context and the fake page.
    type Timeline = Rc<RefCell<Vec<String>>>;

    struct Ctx {
        timeline: Timeline,
    }

    struct FakePage {
        timeline: Timeline,
        fail: bool,
    }

    impl ScriptTarget for FakePage {
        fn evaluate_script(&self, js: &str) -> Result<(), ScriptError> {
            if self.fail {
                return Err(ScriptError("page gone".into()));
            }
            self.timeline.borrow_mut().push(format!("eval:{js}"));
            Ok(())
        }
    }

    fn pump_with(rx: EventReceiver) -> EventPump<Ctx> {
        let mut registry: HostRegistry<Ctx> = HostRegistry::new();
        registry
            .register("echo", |ctx: &mut Ctx, args| {
                let v = arg(args, 0)?.to_string();
                ctx.timeline.borrow_mut().push(format!("call:echo:{v}"));
                Ok(json!(v))
            })
            .unwrap();
        EventPump::new(Dispatcher::new(registry, "cb"), rx)
    }

    fn fixture() -> (Timeline, Ctx, FakePage) {
        let timeline: Timeline = Rc::default();
        let ctx = Ctx {
            timeline: Rc::clone(&timeline),
        };
        let page = FakePage {
            timeline: Rc::clone(&timeline),
            fail: false,
        };
        (timeline, ctx, page)
    }

    #[test]
    fn scripts_from_another_thread_run_in_order() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (timeline, mut ctx, page) = fixture();

        let producer = thread::spawn(move || {
            tx.send(BridgeEvent::Script("first()".into())).unwrap();
            tx.send(BridgeEvent::Script("second()".into())).unwrap();
        });
        producer.join().unwrap();

        pump.pump(&mut ctx, &page);
        assert_eq!(
            *timeline.borrow(),
            vec!["eval:first()".to_string(), "eval:second()".to_string()]
        );
    }

    #[test]
    fn calls_and_scripts_never_interleave() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (timeline, mut ctx, page) = fixture();

        let pipe_tx = tx.clone();
        tx.send(BridgeEvent::Script("a()".into())).unwrap();
        tx.send(BridgeEvent::Call(
            CallDescriptor::new("echo").with_timestamp("1").with_args(["x"]),
        ))
        .unwrap();
        thread::spawn(move || pipe_tx.send(BridgeEvent::Script("b()".into())).unwrap())
            .join()
            .unwrap();

        pump.pump(&mut ctx, &page);
        assert_eq!(
            *timeline.borrow(),
            vec![
                "eval:a()".to_string(),
                "call:echo:x".to_string(),
                "eval:cb(\"echo\", 1, \"x\");".to_string(),
                "eval:b()".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_method_does_not_stop_the_queue() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (timeline, mut ctx, page) = fixture();

        tx.send(BridgeEvent::Call(CallDescriptor::new("nope").with_timestamp("3")))
            .unwrap();
        tx.send(BridgeEvent::Script("after()".into())).unwrap();

        pump.pump(&mut ctx, &page);
        assert_eq!(*timeline.borrow(), vec!["eval:after()".to_string()]);
    }

    #[test]
    fn lifecycle_events_are_returned() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (_timeline, mut ctx, page) = fixture();

        tx.send(BridgeEvent::PageLoad {
            state: PageLoadState::Finished,
            url: "file:///index.html".into(),
        })
        .unwrap();
        tx.send(BridgeEvent::TitleChanged("Make Art".into())).unwrap();

        let rest = pump.pump(&mut ctx, &page);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1], BridgeEvent::TitleChanged("Make Art".into()));
    }

    #[test]
    fn evaluation_failures_are_swallowed() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (timeline, mut ctx, mut page) = fixture();
        page.fail = true;

        tx.send(BridgeEvent::Call(
            CallDescriptor::new("echo").with_timestamp("1").with_args(["y"]),
        ))
        .unwrap();
        pump.pump(&mut ctx, &page);
        assert_eq!(*timeline.borrow(), vec!["call:echo:y".to_string()]);
    }

    #[test]
    fn pump_returns_when_producers_are_gone() {
        let (tx, rx) = event_channel();
        let pump = pump_with(rx);
        let (_timeline, mut ctx, page) = fixture();
        drop(tx);
        assert!(pump.pump(&mut ctx, &page).is_empty());
    }
}
