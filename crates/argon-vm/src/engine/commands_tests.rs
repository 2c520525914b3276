use argon_bytecode::Opcode;

use super::commands::{Command, Handler, Marker};

#[test]
fn markers_fire_and_others_select() {
    let commands: Vec<_> = Opcode::ALL.iter().map(|&op| Command::from(op)).collect();

    assert_eq!(
        commands,
        [
            Command::Fire(Marker::End),
            Command::Fire(Marker::Split),
            Command::Select(Handler::CreateTable),
            Command::Select(Handler::AddField),
            Command::Select(Handler::AddRecord),
            Command::Select(Handler::OpenFile),
            Command::Select(Handler::Ignore),
        ]
    );
}

#[test]
fn handler_round_trips_through_opcode() {
    for op in Opcode::ALL.into_iter().filter(|op| !op.is_marker()) {
        let Command::Select(handler) = Command::from(op) else {
            panic!("{op:?} should select a handler");
        };
        assert_eq!(handler.opcode(), op);
        assert_eq!(handler.name(), op.name());
    }
}

#[test]
fn marker_names() {
    assert_eq!(Marker::End.name(), "End");
    assert_eq!(Marker::Split.name(), "Split");
}
