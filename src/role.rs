//! Role interfaces and capability resolution.
//!
//! A plugin instance implements a fixed, compile-time-determined subset of
//! the functional roles. The dispatcher never sees the concrete type: it
//! queries the [`PluginModule`] capability set for the role an event needs
//! and receives a trait object or nothing. Resolution is a pure query with
//! no side effect and may be repeated freely during one dispatch.

use crate::clipboard::{ CopyBuffer, SelectionCounts };
use crate::document::IdTable ;
use crate::event::InputState ;
use crate::interpolate::{ ApexWeight, VertexWeight };
use crate::value::{ Handle, Value };



/// The functional roles a plugin instance may implement.
///
/// Station and Command are not mutually exclusive; an interactive command
/// plugin typically answers to both.
#[derive( Copy, Clone, Debug, Eq, Hash, PartialEq )]
pub enum Role {
    Import,
    Export,
    Create,
    Object,
    Select,
    Station,
    Command,
}

impl std::fmt::Display for Role {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { write!( f, "{:?}", self )}
}

/// Resident plugin behaviour: lifecycle, documents, undo, notifications and
/// the two variable-length protocols.
///
/// Every method has a neutral default so an implementation overrides only
/// the events it handles.
pub trait StationHandler {

    /// Called once after the module is loaded. Returning `false` reports the
    /// load as failed.
    fn initialize( &mut self ) -> bool { true }

    /// Called once before the module is unloaded.
    fn shutdown( &mut self ) -> bool { true }

    /// Name of sub-command `index`, or `None` past the last sub-command. The
    /// host enumerates by calling with increasing indices until `None`.
    fn subcommand( &mut self, index: i32 ) -> Option<String> {
        let _ = index;
        None
    }

    /// Display title of sub-command `index`.
    fn subcommand_title( &mut self, index: i32 ) -> Option<String> {
        let _ = index;
        None
    }

    /// Activation toggle from the host. Returns the resulting state.
    fn on_activate( &mut self, flag: bool ) -> bool { flag }

    /// Whether the station is currently active.
    fn is_activated( &mut self ) -> bool { false }

    /// Host window minimize/restore notification.
    fn on_minimize( &mut self, minimized: bool ) -> bool {
        let _ = minimized;
        true
    }

    /// A document was created. `filename` is absent for an untitled
    /// document; `settings` points at the plugin's settings element.
    fn on_new_document( &mut self, filename: Option<&str>, settings: Handle ) {
        let _ = ( filename, settings );
    }

    /// Another document was merged into the current one. The tables remap
    /// object and material identifiers from the inserted document.
    fn on_insert_document( &mut self, filename: &str, objects: &IdTable, materials: &IdTable ) {
        let _ = ( filename, objects, materials );
    }

    /// The current document is being closed.
    fn on_end_document( &mut self ) {}

    /// The document is being saved. Returning `true` asks the host to
    /// persist plugin unique ids with the document.
    fn on_save_document( &mut self, filename: &str, settings: Handle ) -> bool {
        let _ = ( filename, settings );
        false
    }

    /// The document is being saved in a past format version.
    fn on_save_past_document( &mut self, filename: &str, settings: Handle ) -> bool {
        let _ = ( filename, settings );
        false
    }

    /// Undo requested. Returns `true` when this plugin consumed the step.
    fn on_undo( &mut self, state: i32 ) -> bool {
        let _ = state;
        false
    }

    /// Redo requested. Returns `true` when this plugin consumed the step.
    fn on_redo( &mut self, state: i32 ) -> bool {
        let _ = state;
        false
    }

    /// The host's undo buffer state changed.
    fn on_undo_updated( &mut self, state: i32, size: i32 ) {
        let _ = ( state, size );
    }

    // Notification-only events. Handlers must not mutate document state from
    // within these calls; the host enforces this by contract, not by type.

    /// An object was modified.
    fn on_object_modified( &mut self ) {}

    /// The object selection changed.
    fn on_object_selected( &mut self ) {}

    /// A material was modified.
    fn on_material_modified( &mut self ) {}

    /// The object list changed.
    fn on_object_list_updated( &mut self ) {}

    /// The material list changed.
    fn on_material_list_updated( &mut self ) {}

    /// The scene was updated.
    fn on_scene_updated( &mut self, scene: Handle ) {
        let _ = scene;
    }

    /// An edit option changed.
    fn on_edit_option_changed( &mut self ) {}

    /// Message relayed from another plugin. The returned integer goes back
    /// to the sender through the `result` slot.
    fn on_user_message( &mut self, src_product: i32, src_id: i32, description: &str, message: &[u8] ) -> i32 {
        let _ = ( src_product, src_id, description, message );
        0
    }

    /// Interpolation weights requested for one vertex of `target`.
    fn interpolate_vertex( &mut self, target: Handle, vertex: i32, weights: &[VertexWeight] ) -> bool {
        let _ = ( target, vertex, weights );
        false
    }

    /// Interpolation weights requested for one apex of one face of `target`.
    fn interpolate_apex( &mut self, target: Handle, face: i32, apex: i32, weights: &[ApexWeight] ) -> bool {
        let _ = ( target, face, apex, weights );
        false
    }

    /// Asks whether a copy is currently possible given the selection.
    fn clipboard_query( &mut self, selection: &SelectionCounts ) -> bool {
        let _ = selection;
        false
    }

    /// Copy (or cut) `object` into `buffer`. The tables carry the original
    /// ids of the copied elements. Returns `true` on success.
    fn clipboard_copy(
        &mut self,
        cut: bool,
        object: Handle,
        objects: &IdTable,
        materials: &IdTable,
        buffer: &mut CopyBuffer,
    ) -> bool {
        let _ = ( cut, object, objects, materials, buffer );
        false
    }

    /// Paste a previously copied buffer into `object`.
    fn clipboard_paste( &mut self, object: Handle, data: &[u8] ) {
        let _ = ( object, data );
    }

}

/// Interactive command behaviour: pointer and keyboard input routed from the
/// host's scene view.
///
/// Input events are only delivered to instances that resolve this role.
/// Every handler receives the scene handle and the decoded [`InputState`]
/// and reports whether it consumed the event.
pub trait CommandHandler {

    fn on_left_button_down( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_left_button_up( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_middle_button_down( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_middle_button_up( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_right_button_down( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_right_button_up( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_mouse_move( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_mouse_wheel( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

    fn on_key_down( &mut self, scene: Handle, input: &InputState ) -> bool {
        let _ = ( scene, input );
        false
    }

}

/// File import behaviour.
pub trait ImportHandler {

    /// Imports `filename` into the document.
    fn import_file( &mut self, filename: &str, document: Handle ) -> bool ;

    /// Whether this importer may run outside the UI thread.
    fn supports_background( &mut self ) -> bool { false }

    /// Stores host-supplied options ahead of a background import; they are
    /// read back by the instance during [`import_file`].
    ///
    /// [`import_file`]: ImportHandler::import_file
    fn set_options( &mut self, background: bool, options: Option<Value> ) {
        let _ = ( background, options );
    }

}

/// File export behaviour.
pub trait ExportHandler {
    /// Exports the document to `filename`.
    fn export_file( &mut self, filename: &str, document: Handle ) -> bool ;
}

/// Primitive creation behaviour.
pub trait CreateHandler {
    /// Creates content in the document.
    fn create( &mut self, document: Handle ) -> bool ;
}

/// Whole-object modification behaviour.
pub trait ObjectHandler {
    /// Modifies the current object.
    fn modify_object( &mut self, document: Handle ) -> bool ;
}

/// Selected-element modification behaviour.
pub trait SelectHandler {
    /// Modifies the selected elements.
    fn modify_select( &mut self, document: Handle ) -> bool ;
}

/// Capability set of one plugin instance.
///
/// Each accessor is a "try as role" query: it returns the role view when the
/// instance implements the role and `None` otherwise. The set is fixed at
/// construction; queries are idempotent and observably side-effect free.
pub trait PluginModule {

    /// The instance as a Station, if it implements that role.
    fn as_station( &mut self ) -> Option<&mut dyn StationHandler> { None }

    /// The instance as a Command, if it implements that role.
    fn as_command( &mut self ) -> Option<&mut dyn CommandHandler> { None }

    /// The instance as an Importer, if it implements that role.
    fn as_import( &mut self ) -> Option<&mut dyn ImportHandler> { None }

    /// The instance as an Exporter, if it implements that role.
    fn as_export( &mut self ) -> Option<&mut dyn ExportHandler> { None }

    /// The instance as a Creator, if it implements that role.
    fn as_create( &mut self ) -> Option<&mut dyn CreateHandler> { None }

    /// The instance as an Object modifier, if it implements that role.
    fn as_object( &mut self ) -> Option<&mut dyn ObjectHandler> { None }

    /// The instance as a Select modifier, if it implements that role.
    fn as_select( &mut self ) -> Option<&mut dyn SelectHandler> { None }

    /// Queries whether the instance resolves `role`, without borrowing the
    /// role view.
    fn implements( &mut self, role: Role ) -> bool {
        match role {
            Role::Import => self.as_import().is_some(),
            Role::Export => self.as_export().is_some(),
            Role::Create => self.as_create().is_some(),
            Role::Object => self.as_object().is_some(),
            Role::Select => self.as_select().is_some(),
            Role::Station => self.as_station().is_some(),
            Role::Command => self.as_command().is_some(),
        }
    }

}
