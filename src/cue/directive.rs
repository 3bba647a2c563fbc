/// Where in the sheet a directive is read: before the first `TRACK` or inside one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Context {
    Disc,
    Track,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Directive {
    /// `REM ...`, skipped up to the end of the line.
    Comment,
    /// `TRACK <number> <type>`
    Track,
    /// `CATALOG <string>`
    Catalog,
    /// `CDTEXTFILE`, `PERFORMER`, `SONGWRITER` or `TITLE` before the first track, value discarded.
    DiscAttribute,
    /// `FILE <filename> <filetype>`
    File,
    /// `ISRC <isrc>`
    Isrc,
    /// `PERFORMER`, `SONGWRITER` or `TITLE` inside a track, value discarded.
    TrackAttribute,
    /// `FLAGS <flag>...`
    Flags,
    /// `PREGAP` or `POSTGAP <timestamp>`
    Gap,
    /// `INDEX <number> <timestamp>`
    Index,
    /// `FILE` inside a track, skipped up to the end of the line.
    TrackFile,
}

const DIRECTIVES: &[(Context, &str, Directive)] = &[
    (Context::Disc, "REM", Directive::Comment),
    (Context::Disc, "TRACK", Directive::Track),
    (Context::Disc, "CATALOG", Directive::Catalog),
    (Context::Disc, "CDTEXTFILE", Directive::DiscAttribute),
    (Context::Disc, "PERFORMER", Directive::DiscAttribute),
    (Context::Disc, "SONGWRITER", Directive::DiscAttribute),
    (Context::Disc, "TITLE", Directive::DiscAttribute),
    (Context::Disc, "FILE", Directive::File),
    (Context::Track, "REM", Directive::Comment),
    (Context::Track, "TRACK", Directive::Track),
    (Context::Track, "ISRC", Directive::Isrc),
    (Context::Track, "PERFORMER", Directive::TrackAttribute),
    (Context::Track, "SONGWRITER", Directive::TrackAttribute),
    (Context::Track, "TITLE", Directive::TrackAttribute),
    (Context::Track, "FLAGS", Directive::Flags),
    (Context::Track, "PREGAP", Directive::Gap),
    (Context::Track, "POSTGAP", Directive::Gap),
    (Context::Track, "INDEX", Directive::Index),
    (Context::Track, "FILE", Directive::TrackFile),
];

impl Directive {
    /// Resolves a tag to the directive it introduces in `context`, or `None`
    /// if the tag is not allowed there.
    pub fn lookup(context: Context, tag: &str) -> Option<Directive> {
        DIRECTIVES
            .iter()
            .find(|(c, name, _)| *c == context && *name == tag)
            .map(|(_, _, directive)| *directive)
    }
}
