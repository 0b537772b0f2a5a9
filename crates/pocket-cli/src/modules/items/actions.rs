use pocket_core::{AddOptions, RetrieveFilter};
use tracing::info;

use super::args::{AddArgs, ArchiveArgs, ListArgs};
use super::format::ListTemplate;
use crate::modules::system::CommandContext;

pub(crate) fn build_filter(args: &ListArgs) -> RetrieveFilter {
    RetrieveFilter {
        state: args.state,
        favorite: args.favorite,
        tag: args.tag.clone(),
        content_type: args.content_type,
        sort: args.sort,
        detail_type: None,
        search: args.search.clone(),
        domain: args.domain.clone(),
        since: args.since,
        count: args.count,
        offset: args.offset,
    }
}

pub(crate) async fn handle_list(args: ListArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    // Parse before the request so a bad template fails fast.
    let template = if args.json {
        None
    } else {
        Some(ListTemplate::parse(&args.format)?)
    };
    let result = ctx.client.retrieve(&build_filter(&args)).await?;
    let items = result.sorted_items();
    info!(count = items.len(), "listing items");

    match template {
        Some(template) => {
            for item in items {
                println!("{}", template.render(item));
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&items)?),
    }
    Ok(())
}

pub(crate) async fn handle_archive(
    args: ArchiveArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let result = ctx.client.archive(&args.item_ids).await?;
    for (item_id, ok) in args.item_ids.iter().zip(&result.action_results) {
        let outcome = if *ok { "archived" } else { "failed" };
        println!("{item_id}\t{outcome}");
    }
    if !result.all_succeeded() {
        anyhow::bail!(
            "{} of {} archive actions failed",
            result.failed_count(),
            args.item_ids.len()
        );
    }
    Ok(())
}

pub(crate) async fn handle_add(args: AddArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let options = AddOptions {
        url: args.url,
        title: args.title,
        tags: args.tags,
        tweet_id: None,
    };
    ctx.client.add(&options).await?;
    println!("Added {}", options.url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::items::format::DEFAULT_TEMPLATE;
    use pocket_core::{FavoriteFilter, State};

    fn list_args() -> ListArgs {
        ListArgs {
            format: DEFAULT_TEMPLATE.to_string(),
            json: false,
            domain: None,
            tag: None,
            search: None,
            state: None,
            favorite: None,
            content_type: None,
            sort: None,
            since: None,
            count: None,
            offset: None,
        }
    }

    #[test]
    fn filter_carries_only_given_options() {
        let filter = build_filter(&list_args());
        assert_eq!(filter, RetrieveFilter::default());

        let mut args = list_args();
        args.domain = Some("example.com".to_string());
        args.state = Some(State::Archive);
        args.favorite = Some(FavoriteFilter::Favorited);
        args.count = Some(10);
        let filter = build_filter(&args);
        assert_eq!(
            serde_json::to_value(&filter).expect("filter encodes"),
            serde_json::json!({
                "state": "archive",
                "favorite": "1",
                "domain": "example.com",
                "count": 10
            })
        );
    }
}
