//! Shell-first page streaming.

use std::fmt::Display;

use futures::Sink;
use sniper_core::WorkloadError;
use sniper_site::PageSection;
use sniper_streaming::{Shell, StreamingSink};

/// Stream the shell, each section in order, then the closing markup.
pub async fn stream_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    shell: &Shell,
    sections: &[PageSection],
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink.send_shell(&shell.render_opening()).await?;
    for section in sections {
        sink.send_section(section.name, &section.html).await?;
    }
    sink.send_section("closing", &shell.render_closing()).await?;
    sink.complete();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use sniper_core::{LifecyclePhase, Page, RequestTiming};
    use sniper_site::{ContactFormView, Site};

    #[test]
    fn test_streams_shell_sections_and_closing() {
        let site = Site::default();
        let sections = site.sections(Page::About, &ContactFormView::new());
        let shell = site.shell(Page::About);

        let mut sink: StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> =
            StreamingSink::new(Vec::new(), RequestTiming::new());
        block_on(stream_page(&mut sink, &shell, &sections)).unwrap();

        assert_eq!(sink.phase(), LifecyclePhase::Completed);
        assert_eq!(sink.sections_sent().len(), sections.len() + 1);
        assert_eq!(sink.sections_sent().last().map(String::as_str), Some("closing"));

        let chunks = sink.into_inner();
        assert!(String::from_utf8_lossy(&chunks[0]).contains("<title>About | SniperTrader</title>"));

        let document: String = chunks
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect();
        assert!(document.ends_with("</html>"));
    }
}
