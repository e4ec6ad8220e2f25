use std::collections::BTreeMap;

use poll_client::{PollResource, RequestOptions, ResponseWrapper};
use poll_core::Poll;
use serde::Serialize;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::page::{effective_size, effective_sort};
use crate::context::AppContext;
use crate::output::{output, table};

#[derive(Debug, Serialize)]
struct PageView {
    status: u16,
    total_count: Option<u64>,
    links: BTreeMap<String, u32>,
    items: Vec<Poll>,
}

impl PageView {
    fn from_response(response: ResponseWrapper) -> anyhow::Result<Self> {
        let links = response.links()?;
        Ok(Self {
            status: response.status,
            total_count: response.total_count(),
            links,
            items: response.body,
        })
    }

    fn render_table(&self) -> String {
        let mut out = table::render_polls(&self.items);
        let mut footer = Vec::new();
        if let Some(total) = self.total_count {
            footer.push(format!("total: {total}"));
        }
        if !self.links.is_empty() {
            let pages = self
                .links
                .iter()
                .map(|(rel, page)| format!("{rel}={page}"))
                .collect::<Vec<_>>()
                .join(", ");
            footer.push(format!("pages: {pages}"));
        }
        if !footer.is_empty() {
            out.push_str("\n\n");
            out.push_str(&footer.join("  "));
        }
        out
    }
}

fn request_options(args: &ListArgs, ctx: &AppContext) -> RequestOptions {
    let general = &ctx.config.general;
    let size = effective_size(args.size, general.default_page_size);
    let mut options = RequestOptions::new().size(size);
    if let Some(page) = args.page {
        options = options.page(page);
    }
    for criterion in effective_sort(&args.sort, &general.default_sort) {
        options = options.sort(criterion);
    }
    if let Some(query) = &args.query {
        options = options.query(query.as_str());
    }
    options
}

/// Handle `polls list`.
pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = request_options(args, ctx);
    let response = ctx.editor.resource().query(&options).await?;
    let view = PageView::from_response(response)?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", view.render_table());
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
    }
}
