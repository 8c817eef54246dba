use scene_link::{ ArgList, Dispatcher, EventCode, Outcome, Payload, Value };

use crate::recorder::{ ImportOnly, Importer, Recorder, StationOnly };

#[test]
fn background_query_routes_to_the_import_role() {

	let mut importer = Importer::default();
	importer.background = true ;
	let mut dispatcher = Dispatcher::new( ImportOnly( importer ));

	let outcome = dispatcher.dispatch( EventCode::IMPORT_BACKGROUND_QUERY, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	let mut dispatcher = Dispatcher::new( ImportOnly( Importer::default() ));
	let outcome = dispatcher.dispatch( EventCode::IMPORT_BACKGROUND_QUERY, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::NotHandled );

}

#[test]
fn import_events_skip_station_only_modules() {

	let mut dispatcher = Dispatcher::new( StationOnly( Recorder::default() ));

	let outcome = dispatcher.dispatch( EventCode::IMPORT_BACKGROUND_QUERY, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::NotHandled );
	assert!( dispatcher.module().0.calls.is_empty() );

}

#[test]
fn set_options_stores_flag_and_options_on_the_instance() {

	let mut dispatcher = Dispatcher::new( ImportOnly( Importer::default() ));

	let payload = ArgList::new()
		.arg( "background", true )
		.arg( "args", vec![ 1u8, 2, 3 ]);

	let outcome = dispatcher.dispatch( EventCode::IMPORT_SET_OPTIONS, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	let ( background, options ) = dispatcher.module().0.stored.clone().expect( "options stored" );
	assert!( background );
	assert_eq!( options, Some( Value::Blob( vec![ 1, 2, 3 ])));

}

#[test]
fn set_options_tolerates_an_empty_payload() {

	let mut dispatcher = Dispatcher::new( ImportOnly( Importer::default() ));

	let outcome = dispatcher.dispatch( EventCode::IMPORT_SET_OPTIONS, Payload::None ).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	let ( background, options ) = dispatcher.module().0.stored.clone().expect( "options stored" );
	assert!( !background );
	assert_eq!( options, None );

}
