use pocket_core::Item;

pub(crate) const DEFAULT_TEMPLATE: &str = "[{{item_id:9}}] {{title}} <{{url}}>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemField {
    ItemId,
    ResolvedId,
    Title,
    Url,
    GivenTitle,
    GivenUrl,
    Excerpt,
    Status,
    Favorite,
    WordCount,
    SortId,
    Tags,
    TimeAdded,
}

impl ItemField {
    fn parse(name: &str) -> anyhow::Result<Self> {
        let field = match name {
            "item_id" => Self::ItemId,
            "resolved_id" => Self::ResolvedId,
            "title" => Self::Title,
            "url" => Self::Url,
            "given_title" => Self::GivenTitle,
            "given_url" => Self::GivenUrl,
            "excerpt" => Self::Excerpt,
            "status" => Self::Status,
            "favorite" => Self::Favorite,
            "word_count" => Self::WordCount,
            "sort_id" => Self::SortId,
            "tags" => Self::Tags,
            "time_added" => Self::TimeAdded,
            _ => anyhow::bail!("unknown template field: {name}"),
        };
        Ok(field)
    }

    fn value(self, item: &Item) -> String {
        match self {
            Self::ItemId => item.item_id.to_string(),
            Self::ResolvedId => item.resolved_id.to_string(),
            Self::Title => item.title().to_string(),
            Self::Url => item.url().to_string(),
            Self::GivenTitle => item.given_title.clone(),
            Self::GivenUrl => item.given_url.clone(),
            Self::Excerpt => item.excerpt.clone(),
            Self::Status => item.status.as_str().to_string(),
            Self::Favorite => if item.is_favorite() { "*" } else { "" }.to_string(),
            Self::WordCount => item.word_count.to_string(),
            Self::SortId => item.sort_id.to_string(),
            Self::Tags => item.tag_names().join(","),
            Self::TimeAdded => item
                .time_added
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TemplateToken {
    Text(String),
    Field {
        field: ItemField,
        width: Option<usize>,
    },
}

/// Parsed `--format` template. `{{name}}` inserts a field, `{{name:N}}` pads
/// it on the left to at least `N` columns.
pub(crate) struct ListTemplate {
    tokens: Vec<TemplateToken>,
}

impl ListTemplate {
    pub(crate) fn parse(template: &str) -> anyhow::Result<Self> {
        let mut tokens = Vec::new();
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            if start > 0 {
                tokens.push(TemplateToken::Text(rest[..start].to_string()));
            }
            rest = &rest[start + 2..];
            let end = rest
                .find("}}")
                .ok_or_else(|| anyhow::anyhow!("template placeholder missing closing '}}'"))?;
            let expr = rest[..end].trim();
            if expr.is_empty() {
                anyhow::bail!("template placeholder is empty");
            }
            tokens.push(parse_placeholder(expr)?);
            rest = &rest[end + 2..];
        }
        if !rest.is_empty() {
            tokens.push(TemplateToken::Text(rest.to_string()));
        }
        Ok(Self { tokens })
    }

    pub(crate) fn render(&self, item: &Item) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                TemplateToken::Text(text) => out.push_str(text),
                TemplateToken::Field { field, width } => {
                    let value = field.value(item);
                    match *width {
                        Some(width) => out.push_str(&format!("{value:>width$}")),
                        None => out.push_str(&value),
                    }
                }
            }
        }
        out
    }
}

fn parse_placeholder(expr: &str) -> anyhow::Result<TemplateToken> {
    let (name, width) = match expr.split_once(':') {
        Some((name, width)) => {
            let width = width
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("invalid width in template placeholder: {expr}"))?;
            (name.trim(), Some(width))
        }
        None => (expr, None),
    };
    Ok(TemplateToken::Field {
        field: ItemField::parse(name)?,
        width,
    })
}
