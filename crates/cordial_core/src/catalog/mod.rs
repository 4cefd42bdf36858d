//! The endpoint catalog: every Discord REST endpoint this crate wraps,
//! expressed as data.
//!
//! Each resource module returns its descriptors; [`all`] concatenates them
//! and [`registry`] wires the whole catalog into a [`ToolRegistry`]. The
//! descriptors carry the original tool surface (names, parameter schemas,
//! required sets) so a calling framework sees one tool per endpoint.

mod applications;
mod bans;
mod channels;
mod commands;
mod emojis;
mod gateway;
mod guilds;
mod interactions;
mod invites;
mod members;
mod messages;
mod reactions;
mod roles;
mod scheduled_events;
mod stage_instances;
mod stickers;
mod templates;
mod threads;
mod users;
mod voice;
mod webhooks;

use crate::descriptor::EndpointDescriptor;
use crate::invoker::RestInvoker;
use crate::registry::ToolRegistry;

/// Every endpoint descriptor in the catalog.
pub fn all() -> Vec<EndpointDescriptor> {
    let mut out = Vec::with_capacity(170);
    out.extend(applications::descriptors());
    out.extend(bans::descriptors());
    out.extend(channels::descriptors());
    out.extend(commands::descriptors());
    out.extend(emojis::descriptors());
    out.extend(gateway::descriptors());
    out.extend(guilds::descriptors());
    out.extend(interactions::descriptors());
    out.extend(invites::descriptors());
    out.extend(members::descriptors());
    out.extend(messages::descriptors());
    out.extend(reactions::descriptors());
    out.extend(roles::descriptors());
    out.extend(scheduled_events::descriptors());
    out.extend(stage_instances::descriptors());
    out.extend(stickers::descriptors());
    out.extend(templates::descriptors());
    out.extend(threads::descriptors());
    out.extend(users::descriptors());
    out.extend(voice::descriptors());
    out.extend(webhooks::descriptors());
    out
}

/// A registry with the full catalog registered against `invoker`.
pub fn registry(invoker: RestInvoker) -> ToolRegistry {
    let registry = ToolRegistry::new(invoker);
    for descriptor in all() {
        registry.register(descriptor);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BodyEncoding, FieldLocation, ResponseShape};
    use crate::token::StaticToken;
    use reqwest::Method;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn catalog_covers_every_endpoint() {
        assert_eq!(all().len(), 167);
    }

    #[test]
    fn tool_names_are_unique() {
        let mut seen = HashSet::new();
        for descriptor in all() {
            assert!(
                seen.insert(descriptor.name),
                "duplicate tool name: {}",
                descriptor.name
            );
        }
    }

    #[test]
    fn every_descriptor_is_coherent() {
        for descriptor in all() {
            descriptor
                .check()
                .unwrap_or_else(|e| panic!("{}: {e}", descriptor.name));
        }
    }

    #[test]
    fn every_descriptor_has_name_and_description() {
        for descriptor in all() {
            assert!(!descriptor.name.is_empty());
            assert!(!descriptor.description.is_empty(), "{}", descriptor.name);
            assert!(descriptor.path.starts_with('/'), "{}", descriptor.name);
        }
    }

    #[test]
    fn registry_holds_full_catalog() {
        let registry = registry(RestInvoker::new(Arc::new(StaticToken::new("t"))));
        assert_eq!(registry.len(), 167);
        assert!(registry.get("ban_user_from_guild").is_some());
        assert!(registry.get("list_messages").is_some());
        assert_eq!(registry.definitions().len(), 167);
    }

    #[test]
    fn ban_endpoint_matches_upstream_route() {
        let catalog = all();
        let ban = catalog
            .iter()
            .find(|d| d.name == "ban_user_from_guild")
            .expect("ban tool present");
        assert_eq!(ban.method, Method::PUT);
        assert_eq!(ban.path, "/guilds/{guild_id}/bans/{user_id}");
        assert!(matches!(ban.response, ResponseShape::Empty { .. }));
    }

    #[test]
    fn widget_png_is_the_only_binary_endpoint() {
        let binary: Vec<_> = all()
            .into_iter()
            .filter(|d| matches!(d.response, ResponseShape::Binary { .. }))
            .collect();
        assert_eq!(binary.len(), 1);
        assert_eq!(binary[0].name, "get_guild_widget_png");
    }

    #[test]
    fn sticker_upload_is_the_only_multipart_endpoint() {
        let multipart: Vec<_> = all()
            .into_iter()
            .filter(|d| d.encoding == BodyEncoding::Multipart)
            .collect();
        assert_eq!(multipart.len(), 1);
        assert_eq!(multipart[0].name, "create_guild_sticker");
    }

    #[test]
    fn message_write_endpoints_use_form_encoding() {
        let form: HashSet<_> = all()
            .into_iter()
            .filter(|d| d.encoding == BodyEncoding::Form)
            .map(|d| d.name)
            .collect();
        assert!(form.contains("create_message"));
        assert!(form.contains("update_message"));
        assert!(form.contains("execute_webhook"));
        assert_eq!(form.len(), 8);
    }

    #[test]
    fn bulk_endpoints_send_raw_bodies() {
        for name in [
            "bulk_update_guild_channels",
            "bulk_update_guild_roles",
            "bulk_set_application_commands",
            "bulk_set_guild_application_commands",
        ] {
            let catalog = all();
            let d = catalog
                .iter()
                .find(|d| d.name == name)
                .unwrap_or_else(|| panic!("{name} missing"));
            assert!(d.raw_body, "{name} should send its array verbatim");
        }
    }

    #[test]
    fn get_endpoints_never_carry_bodies() {
        for descriptor in all() {
            if descriptor.method == Method::GET || descriptor.method == Method::DELETE {
                assert_eq!(
                    descriptor.fields_at(FieldLocation::Body).count(),
                    0,
                    "{} carries body fields",
                    descriptor.name
                );
            }
        }
    }
}
