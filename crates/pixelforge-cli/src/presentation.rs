//! Terminal rendering of workflow events.

use pixelforge_core::{ProcessingState, Severity, WorkflowEvent};

/// One status line for `event`, or `None` if it has nothing to show.
pub fn render_event(event: &WorkflowEvent) -> Option<String> {
    match event {
        WorkflowEvent::SelectionChanged { file_name, .. } => Some(format!("Selected {file_name}")),
        WorkflowEvent::ResolutionChanged { resolution } => {
            Some(format!("Target resolution: {}", resolution.label()))
        }
        WorkflowEvent::StateChanged {
            state: ProcessingState::Processing,
        } => Some("Upscaling...".to_string()),
        WorkflowEvent::NotificationAdded { notification } => {
            let marker = match notification.severity {
                Severity::Success => "✔",
                Severity::Error => "✖",
            };
            Some(format!("{marker} {}", notification.message))
        }
        _ => None,
    }
}

/// Print every renderable event to stderr.
pub fn print_events(events: &[WorkflowEvent]) {
    for line in events.iter().filter_map(render_event) {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_core::{NotificationQueue, NoopEmitter, ResolutionChoice};
    use std::sync::Arc;
    use std::time::Duration;

    fn notification(message: &str, severity: Severity) -> WorkflowEvent {
        let queue = NotificationQueue::new(Duration::from_secs(5), Arc::new(NoopEmitter::new()));
        queue.push(message, severity);
        WorkflowEvent::NotificationAdded {
            notification: queue.snapshot().remove(0),
        }
    }

    #[tokio::test]
    async fn test_render_notifications() {
        assert_eq!(
            render_event(&notification("Image upscaled successfully!", Severity::Success)).as_deref(),
            Some("✔ Image upscaled successfully!")
        );
        assert_eq!(
            render_event(&notification("Invalid image file", Severity::Error)).as_deref(),
            Some("✖ Invalid image file")
        );
    }

    #[test]
    fn test_render_state_and_resolution() {
        assert_eq!(
            render_event(&WorkflowEvent::state_changed(ProcessingState::Processing)).as_deref(),
            Some("Upscaling...")
        );
        assert!(render_event(&WorkflowEvent::state_changed(ProcessingState::Idle)).is_none());
        assert_eq!(
            render_event(&WorkflowEvent::ResolutionChanged {
                resolution: ResolutionChoice::Low2K
            })
            .as_deref(),
            Some("Target resolution: 2K")
        );
        assert!(render_event(&WorkflowEvent::ResultCleared).is_none());
    }
}
