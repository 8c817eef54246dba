use scene_link::{ ArgList, Dispatcher, EventCode, Outcome, Payload };

use crate::recorder::{ Recorder, StationOnly };

#[test]
fn undo_and_redo_map_the_boolean_return() {

	let mut recorder = Recorder::default();
	recorder.undo_accepted = true ;
	let mut dispatcher = Dispatcher::new( StationOnly( recorder ));

	let payload = ArgList::new().arg( "state", 4 );

	let outcome = dispatcher.dispatch( EventCode::UNDO, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert_eq!( dispatcher.module().0.last_undo, Some(( 4, 0 )));

	let outcome = dispatcher.dispatch( EventCode::REDO, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );

}

#[test]
fn declined_undo_reports_not_handled() {

	let mut dispatcher = Dispatcher::new( StationOnly( Recorder::default() ));

	let payload = ArgList::new().arg( "state", 1 );
	let outcome = dispatcher.dispatch( EventCode::UNDO, Payload::Args( &payload )).unwrap();

	assert_eq!( outcome, Outcome::NotHandled );
	assert_eq!( dispatcher.module().0.count( "on_undo" ), 1 );

}

#[test]
fn undo_updated_is_void_and_carries_state_and_size() {

	let mut dispatcher = Dispatcher::new( StationOnly( Recorder::default() ));

	let payload = ArgList::new()
		.arg( "state", 2 )
		.arg( "size", 64 );

	let outcome = dispatcher.dispatch( EventCode::UNDO_UPDATED, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );
	assert_eq!( dispatcher.module().0.last_undo, Some(( 2, 64 )));

}
