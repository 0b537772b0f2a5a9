use chrono::{DateTime, Utc};
use pocket_core::{
    ContentType, DetailType, FavoriteFilter, Item, ItemStatus, MediaPresence, RetrieveFilter,
    Sort, State,
};
use proptest::prelude::*;
use serde_json::json;

fn state() -> impl Strategy<Value = State> {
    prop_oneof![Just(State::Unread), Just(State::Archive), Just(State::All)]
}

fn favorite() -> impl Strategy<Value = FavoriteFilter> {
    prop_oneof![
        Just(FavoriteFilter::Unfavorited),
        Just(FavoriteFilter::Favorited)
    ]
}

fn content_type() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::Article),
        Just(ContentType::Video),
        Just(ContentType::Image)
    ]
}

fn sort() -> impl Strategy<Value = Sort> {
    prop_oneof![
        Just(Sort::Newest),
        Just(Sort::Oldest),
        Just(Sort::Title),
        Just(Sort::Site)
    ]
}

fn detail_type() -> impl Strategy<Value = DetailType> {
    prop_oneof![Just(DetailType::Simple), Just(DetailType::Complete)]
}

fn since() -> impl Strategy<Value = DateTime<Utc>> {
    (1i64..4_000_000_000).prop_filter_map("timestamp in range", |seconds| {
        DateTime::<Utc>::from_timestamp(seconds, 0)
    })
}

prop_compose! {
    fn retrieve_filter()(
        state in proptest::option::of(state()),
        favorite in proptest::option::of(favorite()),
        tag in proptest::option::of("[a-z]{0,8}"),
        content_type in proptest::option::of(content_type()),
        sort in proptest::option::of(sort()),
        detail_type in proptest::option::of(detail_type()),
        search in proptest::option::of("[a-z ]{0,12}"),
        domain in proptest::option::of("[a-z]{1,8}\\.com"),
        since in proptest::option::of(since()),
        count in proptest::option::of(0u32..500),
        offset in proptest::option::of(0u32..500),
    ) -> RetrieveFilter {
        RetrieveFilter {
            state,
            favorite,
            tag,
            content_type,
            sort,
            detail_type,
            search,
            domain,
            since,
            count,
            offset,
        }
    }
}

fn item_status() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::Unread),
        Just(ItemStatus::Archived),
        Just(ItemStatus::Deleted)
    ]
}

fn media() -> impl Strategy<Value = MediaPresence> {
    prop_oneof![
        Just(MediaPresence::NoMedia),
        Just(MediaPresence::HasMedia),
        Just(MediaPresence::IsMedia)
    ]
}

proptest! {
    #[test]
    fn filter_serializes_exactly_the_set_fields(filter in retrieve_filter()) {
        let value = serde_json::to_value(&filter).expect("filter encodes");
        let object = value.as_object().expect("object");

        let expected = [
            ("state", filter.state.is_some()),
            ("favorite", filter.favorite.is_some()),
            ("tag", filter.tag.is_some()),
            ("contentType", filter.content_type.is_some()),
            ("sort", filter.sort.is_some()),
            ("detailType", filter.detail_type.is_some()),
            ("search", filter.search.is_some()),
            ("domain", filter.domain.is_some()),
            ("since", filter.since.is_some()),
            ("count", filter.count.is_some()),
            ("offset", filter.offset.is_some()),
        ];
        for (key, set) in expected {
            prop_assert_eq!(object.contains_key(key), set, "key {}", key);
            if set {
                prop_assert!(!object[key].is_null(), "key {} is null", key);
            }
        }
        let set_count = expected.iter().filter(|(_, set)| *set).count();
        prop_assert_eq!(object.len(), set_count);
        if let Some(since) = filter.since {
            prop_assert_eq!(object["since"].as_i64(), Some(since.timestamp()));
        }
    }

    #[test]
    fn item_codes_survive_string_encoding(
        item_id in 1u64..u64::from(u32::MAX),
        status in item_status(),
        has_image in media(),
        has_video in media(),
        word_count in 0i64..100_000,
        favorite in any::<bool>(),
    ) {
        let raw = json!({
            "item_id": item_id.to_string(),
            "status": status.as_i32().to_string(),
            "has_image": has_image.as_i32().to_string(),
            "has_video": has_video.as_i32().to_string(),
            "word_count": word_count.to_string(),
            "favorite": if favorite { "1" } else { "0" },
        });
        let item: Item = serde_json::from_value(raw).expect("item decodes");
        prop_assert_eq!(item.item_id, item_id);
        prop_assert_eq!(item.status, status);
        prop_assert_eq!(item.has_image, has_image);
        prop_assert_eq!(item.has_video, has_video);
        prop_assert_eq!(item.word_count, word_count);
        prop_assert_eq!(item.is_favorite(), favorite);

        let encoded = serde_json::to_value(&item).expect("item encodes");
        let decoded: Item = serde_json::from_value(encoded).expect("item decodes again");
        prop_assert_eq!(decoded, item);
    }
}
