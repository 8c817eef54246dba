use scene_link::{ ArgList, Dispatcher, EventCode, Handle, Outcome, Payload };

use crate::recorder::{ init_logging, Recorder, StationCommand };

fn command_module( consume: bool ) -> Dispatcher<StationCommand> {
	let mut recorder = Recorder::default();
	recorder.consume_input = consume ;
	Dispatcher::new( StationCommand( recorder ))
}

#[test]
fn left_button_down_decodes_the_composite_input_state() {

	init_logging();

	let mut dispatcher = command_module( true );

	// 0x05 sets the left-button and shift bits.
	let payload = ArgList::new()
		.arg( "scene", Handle::new( 0xbeef ))
		.arg( "mouse_pos_x", 10 )
		.arg( "mouse_pos_y", 20 )
		.arg( "button_state", 0x05 )
		.arg( "pressure", 0.0f32 );

	let outcome = dispatcher.dispatch( EventCode::LEFT_BUTTON_DOWN, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	let recorder = &dispatcher.module().0 ;
	assert_eq!( recorder.calls, vec![ "on_left_button_down" ]);
	assert_eq!( recorder.last_scene, Some( Handle::new( 0xbeef )));

	let input = recorder.last_input.clone().expect( "input decoded" );
	assert_eq!( input.x, 10 );
	assert_eq!( input.y, 20 );
	assert!( input.left );
	assert!( input.shift );
	assert!( !input.middle );
	assert!( !input.right );
	assert!( !input.ctrl );
	assert!( !input.alt );

}

#[test]
fn declined_input_reports_not_handled() {

	let mut dispatcher = command_module( false );

	let payload = ArgList::new().arg( "mouse_pos_x", 1 );
	let outcome = dispatcher.dispatch( EventCode::MOUSE_MOVE, Payload::Args( &payload )).unwrap();

	assert_eq!( outcome, Outcome::NotHandled );
	assert_eq!( dispatcher.module().0.count( "on_mouse_move" ), 1 );

}

#[test]
fn wheel_and_modifiers_decode() {

	use scene_link::button_state ;

	let mut dispatcher = command_module( true );

	let payload = ArgList::new()
		.arg( "wheel", -120 )
		.arg( "button_state", button_state::MIDDLE | button_state::CTRL | button_state::ALT );

	let outcome = dispatcher.dispatch( EventCode::MOUSE_WHEEL, Payload::Args( &payload )).unwrap();
	assert_eq!( outcome, Outcome::Handled );

	let input = dispatcher.module().0.last_input.clone().expect( "input decoded" );
	assert_eq!( input.wheel, -120 );
	assert!( input.middle );
	assert!( input.ctrl );
	assert!( input.alt );
	assert!( !input.left );

}

#[test]
fn each_input_event_routes_to_its_handler() {

	let routes = [
		( EventCode::LEFT_BUTTON_DOWN, "on_left_button_down" ),
		( EventCode::LEFT_BUTTON_UP, "on_left_button_up" ),
		( EventCode::MIDDLE_BUTTON_DOWN, "on_middle_button_down" ),
		( EventCode::MIDDLE_BUTTON_UP, "on_middle_button_up" ),
		( EventCode::RIGHT_BUTTON_DOWN, "on_right_button_down" ),
		( EventCode::RIGHT_BUTTON_UP, "on_right_button_up" ),
		( EventCode::MOUSE_MOVE, "on_mouse_move" ),
		( EventCode::MOUSE_WHEEL, "on_mouse_wheel" ),
		( EventCode::KEY_DOWN, "on_key_down" ),
	];

	let mut dispatcher = command_module( true );
	let payload = ArgList::new().arg( "mouse_pos_x", 0 );

	for ( code, handler ) in routes {
		let outcome = dispatcher.dispatch( code, Payload::Args( &payload )).unwrap();
		assert_eq!( outcome, Outcome::Handled, "{}", handler );
		assert_eq!( dispatcher.module().0.count( handler ), 1, "{}", handler );
	}

}
