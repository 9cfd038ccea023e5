//! Ticket system for orders and support requests.
//!
//! Users open tickets from the persistent panel posted by `-send`: the Order
//! and Support buttons show a modal, and submitting it creates a private text
//! channel under the ticket category, visible only to the creator and staff.
//! Administrators close tickets from the button pinned in the channel; closing
//! uploads an HTML transcript to the configured log channel and then deletes
//! the channel.
//!
//! The panel buttons, close buttons, and modals are all routed by custom id,
//! so they keep working across bot restarts without any persisted state.

pub mod close;
pub mod open;
pub mod panel;
pub mod transcript;

use serenity::all::{
    ChannelId, ChannelType, CreateActionRow, CreateInputText, CreateModal, GuildChannel,
    InputTextStyle,
};

/// Custom id of the panel button that opens an order ticket.
pub const ORDER_BUTTON_ID: &str = "persistent_view:ticket";

/// Custom id of the panel button that opens a support ticket.
pub const SUPPORT_BUTTON_ID: &str = "persistent_view:support";

/// Custom id of the close button pinned in each ticket channel.
pub const CLOSE_BUTTON_ID: &str = "ticket:close";

/// Custom id of the confirmation button that closes the ticket.
pub const CONFIRM_CLOSE_ID: &str = "confirm_close:yes";

/// Custom id of the confirmation button that keeps the ticket open.
pub const CANCEL_CLOSE_ID: &str = "confirm_close:no";

/// Custom id of the order modal.
pub const ORDER_MODAL_ID: &str = "ticket_modal:order";

/// Custom id of the support modal.
pub const SUPPORT_MODAL_ID: &str = "ticket_modal:support";

pub(crate) const PROJECT_DETAILS_INPUT_ID: &str = "project_details";
pub(crate) const BUDGET_INPUT_ID: &str = "budget";
pub(crate) const SUPPORT_DETAILS_INPUT_ID: &str = "support_details";

/// Name of the guild category that holds ticket channels.
pub(crate) const TICKET_CATEGORY: &str = "━━━| 🎫 TICKETS |━━━";

/// Open tickets allowed per user at a time.
pub(crate) const MAX_OPEN_TICKETS: usize = 2;

pub(crate) const TICKET_LIMIT_NOTICE: &str =
    "You already have 2 open tickets. Please close one before creating a new ticket.";

/// Which kind of ticket a panel button opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketKind {
    Order,
    Support,
}

impl TicketKind {
    /// Builds the modal shown when the panel button for this kind is pressed.
    pub fn modal(self) -> CreateModal {
        match self {
            TicketKind::Order => CreateModal::new(ORDER_MODAL_ID, "Placing Order").components(vec![
                CreateActionRow::InputText(
                    CreateInputText::new(
                        InputTextStyle::Paragraph,
                        "Project Details",
                        PROJECT_DETAILS_INPUT_ID,
                    )
                    .placeholder("Briefly describe your project")
                    .required(true),
                ),
                CreateActionRow::InputText(
                    CreateInputText::new(InputTextStyle::Short, "Budget (In USD)", BUDGET_INPUT_ID)
                        .placeholder("Provide your approximate budget")
                        .required(true),
                ),
            ]),
            TicketKind::Support => CreateModal::new(SUPPORT_MODAL_ID, "Support Ticket").components(
                vec![CreateActionRow::InputText(
                    CreateInputText::new(
                        InputTextStyle::Paragraph,
                        "Support Details",
                        SUPPORT_DETAILS_INPUT_ID,
                    )
                    .placeholder("Describe your issue or question in detail")
                    .required(true),
                )],
            ),
        }
    }

    /// Builds the ticket channel name for this kind and creator.
    pub fn channel_name(self, username: &str) -> String {
        let symbol = match self {
            TicketKind::Order => "🎫",
            TicketKind::Support => "❓",
        };
        format!("{}〢{}", symbol, username.to_lowercase())
    }
}

/// Finds the ticket category among a guild's channels.
pub(crate) fn find_ticket_category<'a>(
    channels: impl IntoIterator<Item = &'a GuildChannel>,
) -> Option<ChannelId> {
    channels
        .into_iter()
        .find(|channel| channel.kind == ChannelType::Category && channel.name == TICKET_CATEGORY)
        .map(|channel| channel.id)
}

/// Counts a user's open tickets under the ticket category.
///
/// Ticket channels are matched by name suffix, the same way they are named on
/// creation: the lowercased username after the kind marker.
pub(crate) fn count_open_tickets<'a>(
    channels: impl IntoIterator<Item = &'a GuildChannel>,
    category: ChannelId,
    username: &str,
) -> usize {
    let suffix = username.to_lowercase();
    channels
        .into_iter()
        .filter(|channel| channel.parent_id == Some(category))
        .filter(|channel| channel.name.ends_with(&suffix))
        .count()
}
