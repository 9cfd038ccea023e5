//! Interaction event handling.
//!
//! Routes slash commands, message components, and modal submissions to their
//! handlers. Components and modals are keyed on the custom ids baked into the
//! persistent panels, so the routing works across bot restarts without any
//! registration step.

use serenity::all::{Context, Interaction};

use crate::commands::{about, slash};
use crate::context::BotContext;
use crate::ticket;
use crate::ticket::TicketKind;

/// Handles interaction creation.
pub async fn handle_interaction(context: &BotContext, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => slash::dispatch(context, &ctx, &command).await,
        Interaction::Component(component) => {
            let custom_id = component.data.custom_id.clone();
            let result = match custom_id.as_str() {
                ticket::ORDER_BUTTON_ID => {
                    ticket::panel::handle_panel_button(&ctx, &component, TicketKind::Order).await
                }
                ticket::SUPPORT_BUTTON_ID => {
                    ticket::panel::handle_panel_button(&ctx, &component, TicketKind::Support).await
                }
                ticket::CLOSE_BUTTON_ID => {
                    ticket::close::handle_close_button(&ctx, &component).await
                }
                ticket::CONFIRM_CLOSE_ID => {
                    ticket::close::handle_confirm(context, &ctx, &component).await
                }
                ticket::CANCEL_CLOSE_ID => ticket::close::handle_cancel(&ctx, &component).await,
                about::RULES_BUTTON_ID => about::handle_rules_button(&ctx, &component).await,
                about::FAQ_SELECT_ID => about::handle_faq_select(&ctx, &component).await,
                other => {
                    tracing::debug!("Ignoring component interaction '{}'", other);
                    return;
                }
            };
            if let Err(e) = result {
                tracing::error!("Component interaction '{}' failed: {}", custom_id, e);
            }
        }
        Interaction::Modal(modal) => {
            let custom_id = modal.data.custom_id.clone();
            let result = match custom_id.as_str() {
                ticket::ORDER_MODAL_ID => {
                    ticket::open::handle_modal(&ctx, &modal, TicketKind::Order).await
                }
                ticket::SUPPORT_MODAL_ID => {
                    ticket::open::handle_modal(&ctx, &modal, TicketKind::Support).await
                }
                other => {
                    tracing::debug!("Ignoring modal submission '{}'", other);
                    return;
                }
            };
            if let Err(e) = result {
                tracing::error!("Modal submission '{}' failed: {}", custom_id, e);
            }
        }
        _ => {}
    }
}
