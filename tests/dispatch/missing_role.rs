use scene_link::{ ArgList, Dispatcher, EventCode, Outcome, Payload, PluginModule, Role };

use crate::recorder::{ ImportOnly, Importer, NoRoles, Recorder, StationCommand, StationOnly };

#[test]
fn no_roles_handles_nothing() {

	let mut dispatcher = Dispatcher::new( NoRoles );

	let outcome = dispatcher.dispatch( EventCode::INITIALIZE, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::NotHandled );

	let outcome = dispatcher.dispatch( EventCode::OBJECT_MODIFIED, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::NotHandled );

}

#[test]
fn input_events_need_the_command_role() {

	let payload = ArgList::new().arg( "mouse_pos_x", 1 );

	let mut dispatcher = Dispatcher::new( StationOnly( Recorder::default() ));
	let outcome = dispatcher.dispatch( EventCode::LEFT_BUTTON_DOWN, Payload::Args( &payload )).unwrap();

	assert_eq!( outcome, Outcome::NotHandled );
	assert!( dispatcher.module().0.calls.is_empty() );

}

#[test]
fn station_and_command_may_coexist() {

	let mut module = StationCommand( Recorder::default() );
	assert!( module.implements( Role::Station ));
	assert!( module.implements( Role::Command ));
	assert!( !module.implements( Role::Import ));
	assert!( !module.implements( Role::Export ));
	assert!( !module.implements( Role::Create ));
	assert!( !module.implements( Role::Object ));
	assert!( !module.implements( Role::Select ));

	let mut importer = ImportOnly( Importer::default() );
	assert!( importer.implements( Role::Import ));
	assert!( !importer.implements( Role::Station ));

}

#[test]
fn resolution_is_an_idempotent_query() {

	let mut module = StationCommand( Recorder::default() );

	for _ in 0..3 {
		assert!( module.as_station().is_some() );
		assert!( module.as_command().is_some() );
		assert!( module.as_export().is_none() );
	}

	assert!( module.0.calls.is_empty() );

}
