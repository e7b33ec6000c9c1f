//! Keyboard event handling.
//!
//! Dispatch order mirrors the modality of the UI: an open notice swallows
//! the next key, an open prompt captures everything, and only then do keys
//! reach the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use quicknotes_core::{
    resolve_destination, CoreError, DiskWriter, FixedDestination, SaveOutcome, SessionError,
};

use crate::events::AppEvent;

use super::state::{App, LaunchAction, NoticeLevel, PromptKind, PromptOverlay, Screen};

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Any key dismisses an open notice
    if app.notice.take().is_some() {
        return;
    }

    if app.prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }

    match app.screen {
        Screen::Launch => handle_launch_key(app, key),
        Screen::Workspace => handle_workspace_key(app, key),
    }
}

fn handle_launch_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.launch_action = app.launch_action.toggled();
        }
        KeyCode::Enter => match app.launch_action {
            LaunchAction::Start => app.enter_workspace(),
            LaunchAction::Exit => app.should_quit = true,
        },
        KeyCode::Char('s') => app.enter_workspace(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_workspace_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => {
                app.workspace.new_note();
                app.cursor_to_end();
            }
            KeyCode::Char('d') => delete_note(app),
            KeyCode::Char('r') => open_rename_prompt(app),
            KeyCode::Char('s') => open_save_prompt(app),
            KeyCode::Left => app.cycle_selection(-1),
            KeyCode::Right => app.cycle_selection(1),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.screen = Screen::Launch,
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_forward(),
        KeyCode::Left => app.move_left(),
        KeyCode::Right => app.move_right(),
        KeyCode::Home => app.move_home(),
        KeyCode::End => app.move_end(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

fn delete_note(app: &mut App) {
    match app.workspace.delete_selected() {
        Ok(_) => app.cursor_to_end(),
        Err(_) => app.notify(NoticeLevel::Warning, "No note selected to delete"),
    }
}

fn open_rename_prompt(app: &mut App) {
    let Some(note) = app.selected_note() else {
        app.notify(NoticeLevel::Warning, "No note selected to rename");
        return;
    };

    app.prompt = Some(PromptOverlay {
        kind: PromptKind::Rename,
        title: "Edit Title".to_string(),
        input: note.title,
    });
}

fn open_save_prompt(app: &mut App) {
    let Some(note) = app.selected_note() else {
        app.notify(NoticeLevel::Warning, "No note selected to save");
        return;
    };
    if note.trimmed_content().is_empty() {
        app.notify(NoticeLevel::Warning, "Cannot save an empty note");
        return;
    }

    app.prompt = Some(PromptOverlay {
        kind: PromptKind::SaveAs,
        title: "Save Note As".to_string(),
        input: note.title,
    });
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancelled: no action taken, no notification
        KeyCode::Esc => app.prompt = None,
        KeyCode::Enter => {
            if let Some(prompt) = app.prompt.take() {
                confirm_prompt(app, prompt);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.input.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.input.push(c);
            }
        }
        _ => {}
    }
}

fn confirm_prompt(app: &mut App, prompt: PromptOverlay) {
    match prompt.kind {
        PromptKind::Rename => match app.workspace.rename_selected(&prompt.input) {
            Ok(_) => {}
            Err(CoreError::Session(SessionError::InvalidTitle)) => {
                app.notify(NoticeLevel::Warning, "Title cannot be empty");
            }
            Err(err) => app.notify(NoticeLevel::Warning, err.to_string()),
        },
        PromptKind::SaveAs => save_to_destination(app, &prompt.input),
    }
}

fn save_to_destination(app: &mut App, input: &str) {
    let save_dir = app.workspace.config().save_dir.clone();
    // An empty destination counts as cancelling the prompt
    let Some(path) = resolve_destination(input, &save_dir) else {
        return;
    };

    match app
        .workspace
        .save_selected(&FixedDestination(path), &DiskWriter)
    {
        Ok(SaveOutcome::Saved(path)) => app.notify(
            NoticeLevel::Info,
            format!("Note saved to {}", path.display()),
        ),
        Ok(SaveOutcome::Cancelled) => {}
        Err(err) => {
            let level = match err {
                CoreError::SaveIo { .. } => NoticeLevel::Error,
                _ => NoticeLevel::Warning,
            };
            app.notify(level, err.to_string());
        }
    }
}
