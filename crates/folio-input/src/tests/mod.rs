//! Crate-level integration and BDD tests.

use std::sync::Arc;
use std::thread;

use serde::Deserialize;

use crate::converter::{FormatConverter, JsonConverter, YamlConverter};
use crate::dispatcher::InputDispatcher;
use crate::message::Message;
use crate::parsing::{DeserializeParser, MediaParserRegistry, ParsingDispatcher};


#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
struct SectionCreateCommand {
    name: String,
}

fn converter_named(format: &str) -> Arc<dyn FormatConverter> {
    match format {
        "json" => Arc::new(JsonConverter::new()),
        "yaml" => Arc::new(YamlConverter::new()),
        other => panic!("no test converter for format '{other}'"),
    }
}

fn section_parser() -> DeserializeParser<SectionCreateCommand, SectionCreateCommand> {
    DeserializeParser::new(|command: SectionCreateCommand| command)
}

#[test]
fn dispatch_equals_direct_composition() {
    let mut parsers = MediaParserRegistry::new();
    parsers.register("section", section_parser());
    let dispatcher = InputDispatcher::with_converters(
        parsers,
        [("json", converter_named("json")), ("yaml", converter_named("yaml"))],
    );

    let cases = [
        ("json", r#"{"name":"Products"}"#),
        ("yaml", "name: Products\n"),
    ];
    for (format, body) in cases {
        let message = Message::with_content_type(format!("section+{format}"), body);
        let dispatched = dispatcher.dispatch(&message).expect("dispatch");

        let document = converter_named(format)
            .convert(body.as_bytes())
            .expect("convert");
        let direct = dispatcher
            .parsing_dispatcher()
            .parse(document.into_root(), "section")
            .expect("parse");

        assert_eq!(dispatched, direct, "composition differs for {format}");
    }
}

#[test]
fn configured_dispatcher_serves_parallel_requests() {
    let mut parsers = MediaParserRegistry::new();
    parsers.register("section", section_parser());
    let mut dispatcher = InputDispatcher::new(parsers);
    dispatcher.register_shared("json", converter_named("json"));
    let shared = Arc::new(dispatcher);

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let dispatcher = Arc::clone(&shared);
            thread::spawn(move || {
                let body = format!(r#"{{"name":"Section {index}"}}"#);
                let message = Message::with_content_type("section+json", body);
                dispatcher.dispatch(&message).map(|command| command.name)
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let name = handle
            .join()
            .expect("thread completes")
            .expect("dispatch succeeds");
        assert_eq!(name, format!("Section {index}"));
    }
}
