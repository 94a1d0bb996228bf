use std::fmt::Write;
use std::sync::Mutex;

use status_rail::log::{
    self, with_sink, CapturedRecord, FunctionSink, LogMessage, MemorySink, Severity, SourceLocation,
};
use status_rail::{here, log_debug, log_error, log_info, log_this, log_verbose, log_warning};

use crate::support::{capture, serial};

#[test]
fn severities_are_ordered_most_severe_first() {
    assert!(Severity::Error < Severity::Warning);
    assert!(Severity::Warning < Severity::Info);
    assert!(Severity::Info < Severity::Debug);
    assert!(Severity::Debug < Severity::Verbose);
}

#[test]
fn severity_names_match_line_prefixes() {
    let names: Vec<_> = Severity::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["Error", "Warning", "Info", "Debug", "Verbose"]);
    assert_eq!(Severity::Debug.to_string(), "Debug");
}

#[test]
fn threshold_admits_levels_up_to_and_including_itself() {
    let _guard = serial();
    log::set_global_log_level(Severity::Warning);
    assert_eq!(log::global_log_level(), Severity::Warning);
    assert!(log::enabled(Severity::Error));
    assert!(log::enabled(Severity::Warning));
    assert!(!log::enabled(Severity::Info));

    log::set_global_log_level(Severity::Verbose);
    assert!(Severity::ALL.iter().all(|s| log::enabled(*s)));
    log::set_global_log_level(log::DEFAULT_LEVEL);
}

#[test]
fn level_macros_tag_records_with_their_severity() {
    let ((), records) = capture(Severity::Verbose, || {
        log_error!("e");
        log_warning!("w");
        log_info!("i");
        log_debug!("d");
        log_verbose!("v");
    });

    let levels: Vec<_> = records.iter().map(|r| r.severity).collect();
    assert_eq!(levels, Severity::ALL);
    assert_eq!(records[2].message, "i");
}

#[test]
fn filtered_levels_produce_no_records() {
    let ((), records) = capture(Severity::Info, || {
        log_debug!("hidden");
        log_verbose!("hidden");
        log_info!("shown");
    });

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "shown");
}

#[test]
fn records_carry_file_line_and_function() {
    let expected_line = line!() + 2;
    let ((), records) = capture(Severity::Info, || {
        log_warning!("located");
    });

    let record = &records[0];
    assert!(record.file.replace('\\', "/").ends_with("tests/log/mod.rs"));
    assert_eq!(record.line, expected_line);
    assert!(record.function.ends_with("log::records_carry_file_line_and_function"));
}

#[test]
fn start_skips_construction_below_threshold() {
    let (built, records) = capture(Severity::Warning, || {
        LogMessage::start(Severity::Debug, here!()).is_some()
    });
    assert!(!built);
    assert!(records.is_empty());
}

#[test]
fn message_builder_streams_heterogeneous_fragments() {
    let ((), records) = capture(Severity::Info, || {
        let mut msg = LogMessage::new(Severity::Info, here!()).push("loaded ").push(12);
        msg.append(" of ").append(12.5);
        write!(msg, " ({}%)", 96).unwrap();
        assert_eq!(msg.message(), "loaded 12 of 12.5 (96%)");
        msg.end();
    });

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "loaded 12 of 12.5 (96%)");
}

#[test]
fn dropping_an_unflushed_message_flushes_it_once() {
    let ((), records) = capture(Severity::Info, || {
        let _msg = LogMessage::new(Severity::Warning, here!()).push("dropped");
    });

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "dropped");
}

#[test]
fn long_messages_are_kept_whole() {
    let long = "0123456789".repeat(40);
    let ((), records) = capture(Severity::Info, || log_error!("{}", long));
    assert_eq!(records[0].message, long);
}

#[test]
fn scoped_sinks_nest_and_restore() {
    let outer = MemorySink::new();
    let inner = MemorySink::new();

    let _guard = serial();
    with_sink(outer.clone(), || {
        log_error!("first");
        with_sink(inner.clone(), || log_error!("second"));
        log_error!("third");
    });

    let outer_messages: Vec<_> = outer.records().into_iter().map(|r| r.message).collect();
    assert_eq!(outer_messages, ["first", "third"]);
    assert_eq!(inner.len(), 1);
}

#[test]
fn scoped_sink_is_restored_after_a_panic() {
    let outer = MemorySink::new();
    let _guard = serial();

    with_sink(outer.clone(), || {
        let result = std::panic::catch_unwind(|| {
            with_sink(MemorySink::new(), || panic!("boom"));
        });
        assert!(result.is_err());
        log_error!("after panic");
    });

    assert_eq!(outer.records()[0].message, "after panic");
}

#[test]
fn closures_are_sinks() {
    let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
    let handle = seen.clone();

    let _guard = serial();
    with_sink(
        move |record: &log::DiagnosticRecord<'_>| {
            handle.lock().unwrap().push(record.to_string());
        },
        || log_error!("closure sink"),
    );

    let lines = seen.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Error log: "));
    assert!(lines[0].ends_with("closures_are_sinks(): closure sink"));
}

static FUNCTION_CALLS: Mutex<Vec<(Severity, String, String)>> = Mutex::new(Vec::new());

fn record_call(level: Severity, function: &str, message: &str) {
    FUNCTION_CALLS.lock().unwrap().push((level, function.to_string(), message.to_string()));
}

#[test]
fn log_functions_receive_level_function_and_message() {
    let ((), _) = capture(Severity::Info, || {
        with_sink(FunctionSink(record_call), || log_warning!("via fn pointer"));
    });

    let calls = FUNCTION_CALLS.lock().unwrap();
    let (level, function, message) = calls.last().unwrap();
    assert_eq!(*level, Severity::Warning);
    assert!(function.ends_with("log_functions_receive_level_function_and_message()"));
    assert_eq!(message, "via fn pointer");
}

#[test]
fn global_sink_is_used_without_a_scoped_sink() {
    let sink = MemorySink::new();
    let _guard = serial();

    log::set_global_sink(sink.clone());
    log_error!("to global");
    log::reset_global_sink();
    log_error!("to stdout");

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "to global");
    assert!(sink.is_empty());
}

#[test]
fn global_log_function_can_be_installed() {
    let _guard = serial();
    log::set_global_log_function(record_call);
    log_error!("global fn pointer");
    log::reset_global_sink();

    let calls = FUNCTION_CALLS.lock().unwrap();
    assert!(calls.iter().any(|(_, _, message)| message == "global fn pointer"));
}

#[test]
fn log_this_reports_the_address() {
    struct Widget(u8);
    let widget = Widget(1);
    let expected = format!("{:p}", &widget);

    let ((), records) = capture(Severity::Info, || log_this!(&widget));
    assert_eq!(records[0].message, expected);
    assert_eq!(widget.0, 1);
}

#[test]
fn captured_record_copies_a_borrowed_record() {
    let location = SourceLocation::new("src/io.rs", 40, "app::io::read::{{closure}}");
    let record = log::DiagnosticRecord::new(Severity::Debug, location, "eof");
    let captured = CapturedRecord::from(&record);

    assert_eq!(
        captured,
        CapturedRecord {
            severity: Severity::Debug,
            file: "src/io.rs".into(),
            line: 40,
            function: "app::io::read".into(),
            message: "eof".into(),
        }
    );
    assert_eq!(record.function_name(), "app::io::read()");
}

trait Swap {
    fn swap(self) -> Self;
}

impl Swap for (u8, u8) {
    fn swap(self) -> Self {
        log_error!("swapping {:?}", self);
        (self.1, self.0)
    }
}

#[test]
fn tuple_impl_keeps_its_function_name() {
    let (swapped, records) = capture(Severity::Info, || (1u8, 2u8).swap());
    assert_eq!(swapped, (2, 1));

    let record = &records[0];
    assert!(record.function.starts_with("<(u8, u8) as "));
    assert!(record.function.ends_with("log::Swap>::swap"));

    let location = SourceLocation::new("src/pair.rs", 9, "<(u8, u8) as app::Swap>::swap::__status_rail_here");
    let line = log::DiagnosticRecord::new(Severity::Error, location, "x").to_string();
    assert_eq!(line, "Error log: <(u8, u8) as app::Swap>::swap(): x");
    assert_eq!(location.to_string(), "src/pair.rs:9 in <(u8, u8) as app::Swap>::swap()");
}

struct Unprintable;

impl std::fmt::Display for Unprintable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("part")?;
        Err(std::fmt::Error)
    }
}

#[test]
fn failing_display_is_marked_in_the_message() {
    let ((), records) = capture(Severity::Info, || {
        log_error!("a {} b", Unprintable);
    });
    assert_eq!(records[0].message, format!("a part{}", log::FMT_ERROR_MARKER));

    let msg = LogMessage::new(Severity::Info, here!()).push(Unprintable).push(" after");
    assert_eq!(msg.message(), "part<fmt error> after");
    with_sink(MemorySink::new(), || msg.end());
}

#[test]
fn c_style_signatures_are_trimmed_in_function_names() {
    let location = SourceLocation::new("hash.cpp", 3, "ctle::status ctle::sha256(const void*, size_t)");
    let record = log::DiagnosticRecord::new(Severity::Error, location, "bad input");
    assert_eq!(record.to_string(), "Error log: ctle::sha256(): bad input");
}

#[cfg(feature = "serde")]
#[test]
fn captured_records_round_trip_through_json() {
    let record = CapturedRecord {
        severity: Severity::Warning,
        file: "src/lib.rs".into(),
        line: 1,
        function: "app::main".into(),
        message: "hi".into(),
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""severity":"Warning""#));
    let back: CapturedRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[cfg(feature = "tracing")]
mod tracing_bridge {
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use status_rail::log::{self, with_sink, Severity, TracingSink};
    use status_rail::{log_error, log_verbose, log_warning};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Records the level, target and message of every event it sees.
    #[derive(Clone, Default)]
    struct EventLog {
        events: Arc<Mutex<Vec<(Level, String, String)>>>,
    }

    impl EventLog {
        fn events(&self) -> Vec<(Level, String, String)> {
            self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl Subscriber for EventLog {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            let meta = event.metadata();
            self.events.lock().unwrap_or_else(PoisonError::into_inner).push((
                *meta.level(),
                meta.target().to_string(),
                visitor.0,
            ));
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    #[test]
    fn severities_map_onto_tracing_levels() {
        let levels: Vec<Level> = Severity::ALL.into_iter().map(Level::from).collect();
        assert_eq!(levels, [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE]);
    }

    #[test]
    fn records_arrive_as_events_at_the_mapped_level() {
        let _guard = crate::support::serial();
        let subscriber = EventLog::default();

        log::set_global_log_level(Severity::Verbose);
        tracing::subscriber::with_default(subscriber.clone(), || {
            with_sink(TracingSink, || {
                log_error!("disk {} failed", 3);
                log_warning!("slow");
                log_verbose!("byte {}", 7);
            })
        });
        log::set_global_log_level(log::DEFAULT_LEVEL);

        let events = subscriber.events();
        let levels: Vec<Level> = events.iter().map(|(level, _, _)| *level).collect();
        assert_eq!(levels, [Level::ERROR, Level::WARN, Level::TRACE]);
        assert!(events.iter().all(|(_, target, _)| target == "status_rail"));
        assert_eq!(events[0].2, "disk 3 failed");
        assert_eq!(events[2].2, "byte 7");
    }

    #[test]
    fn threshold_filters_before_tracing_sees_a_record() {
        let _guard = crate::support::serial();
        let subscriber = EventLog::default();

        log::set_global_log_level(Severity::Warning);
        tracing::subscriber::with_default(subscriber.clone(), || {
            with_sink(TracingSink, || log_verbose!("hidden"))
        });
        log::set_global_log_level(log::DEFAULT_LEVEL);

        assert!(subscriber.events().is_empty());
    }

    #[test]
    fn forwarding_without_a_subscriber_is_harmless() {
        let _guard = crate::support::serial();
        with_sink(TracingSink, || log_error!("into tracing"));
    }
}
