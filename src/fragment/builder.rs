//! GPX fragment builder API

use time::format_description::well_known;
use time::OffsetDateTime;

use super::cdata::wrap_cdata;
use super::options::DocumentOptions;

/// Tag name of a point recorded inside a track segment
pub const TRKPT: &str = "trkpt";
/// Tag name of a standalone waypoint
pub const WPT: &str = "wpt";
/// Tag name of a point belonging to a route
pub const RTEPT: &str = "rtept";

/// Emits GPX 1.1 fragments as strings, one call per fragment.
///
/// The caller assembles the document by concatenating, in order: `open`,
/// `metadata`, then per track `track_open`, `info`, one or more
/// `segment_open` .. points .. `segment_close`, `track_close`, and finally
/// `close`. Fields stay empty until set and persist until overwritten;
/// every fragment method reads the fields it needs and leaves them intact.
pub struct GpxFragments {
    options: DocumentOptions,
    meta_name: String,
    meta_desc: String,
    name: String,
    desc: String,
    ele: String,
    sym: String,
    src: String,
    time: String,
    speed: String,
}

impl GpxFragments {
    /// Start a new builder with all fields empty
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    /// Start a new builder with a custom document header
    pub fn with_options(options: DocumentOptions) -> Self {
        Self {
            options,
            meta_name: String::new(),
            meta_desc: String::new(),
            name: String::new(),
            desc: String::new(),
            ele: String::new(),
            sym: String::new(),
            src: String::new(),
            time: String::new(),
            speed: String::new(),
        }
    }

    /// XML declaration plus the `<gpx>` root open tag. Pair with [`close`](Self::close)
    pub fn open(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<gpx xmlns=\"http://www.topografix.com/GPX/1/1\" version=\"{}\" creator=\"{}\">\n",
            self.options.version, self.options.creator
        )
    }

    /// Root closing tag, emitted exactly once per document
    pub fn close(&self) -> String {
        "</gpx>\n".to_string()
    }

    /// The `<metadata>` block. Empty fields have their sub-element omitted
    pub fn metadata(&self) -> String {
        let mut out = String::from("<metadata>\n");
        if !self.meta_name.is_empty() {
            out.push_str(&format!("<name>{}</name>\n", wrap_cdata(&self.meta_name)));
        }
        if !self.meta_desc.is_empty() {
            out.push_str(&format!("<desc>{}</desc>\n", wrap_cdata(&self.meta_desc)));
        }
        out.push_str("</metadata>\n");
        out
    }

    pub fn track_open(&self) -> String {
        "<trk>\n".to_string()
    }

    pub fn track_close(&self) -> String {
        "</trk>\n".to_string()
    }

    pub fn segment_open(&self) -> String {
        "<trkseg>\n".to_string()
    }

    pub fn segment_close(&self) -> String {
        "</trkseg>\n".to_string()
    }

    /// Name and description sub-elements for nesting inside a track,
    /// waypoint or route. Empty fields are omitted
    pub fn info(&self) -> String {
        let mut out = String::new();
        if !self.name.is_empty() {
            out.push_str(&format!("<name>{}</name>\n", wrap_cdata(&self.name)));
        }
        if !self.desc.is_empty() {
            out.push_str(&format!("<desc>{}</desc>\n", wrap_cdata(&self.desc)));
        }
        out
    }

    /// A point element using the stored elevation field.
    ///
    /// `tag` is emitted verbatim as the element name; callers are expected
    /// to pass [`TRKPT`], [`WPT`] or [`RTEPT`] but any tag is accepted.
    /// Coordinates are opaque text, not range checked.
    pub fn point(&self, tag: &str, lon: &str, lat: &str) -> String {
        self.render_point(tag, lon, lat, &self.ele)
    }

    /// A point element with an elevation for this call only; the stored
    /// elevation field is left untouched
    pub fn point_with_ele(&self, tag: &str, lon: &str, lat: &str, ele: &str) -> String {
        self.render_point(tag, lon, lat, ele)
    }

    // Children follow the GPX 1.1 wpt schema order, with the non-schema
    // speed element last for firmware parity with GPX 1.0 consumers.
    fn render_point(&self, tag: &str, lon: &str, lat: &str, ele: &str) -> String {
        let mut out = format!("<{} lat=\"{}\" lon=\"{}\">", tag, lat, lon);
        if !ele.is_empty() {
            out.push_str(&format!("<ele>{}</ele>", ele));
        }
        if !self.time.is_empty() {
            out.push_str(&format!("<time>{}</time>", self.time));
        }
        if !self.src.is_empty() {
            out.push_str(&format!("<src>{}</src>", self.src));
        }
        if !self.sym.is_empty() {
            out.push_str(&format!("<sym>{}</sym>", self.sym));
        }
        if !self.speed.is_empty() {
            out.push_str(&format!("<speed>{}</speed>", self.speed));
        }
        out.push_str(&format!("</{}>\n", tag));
        out
    }

    pub fn meta_name(&mut self, name: String) -> &mut Self {
        self.meta_name = name;

        self
    }

    pub fn meta_desc(&mut self, desc: String) -> &mut Self {
        self.meta_desc = desc;

        self
    }

    pub fn name(&mut self, name: String) -> &mut Self {
        self.name = name;

        self
    }

    pub fn desc(&mut self, desc: String) -> &mut Self {
        self.desc = desc;

        self
    }

    pub fn ele(&mut self, ele: String) -> &mut Self {
        self.ele = ele;

        self
    }

    pub fn sym(&mut self, sym: String) -> &mut Self {
        self.sym = sym;

        self
    }

    pub fn src(&mut self, src: String) -> &mut Self {
        self.src = src;

        self
    }

    pub fn time(&mut self, time: String) -> &mut Self {
        self.time = time;

        self
    }

    pub fn speed(&mut self, speed: String) -> &mut Self {
        self.speed = speed;

        self
    }

    /// Store a timestamp as RFC3339 text in the time field
    pub fn timestamp(&mut self, time: OffsetDateTime) -> Result<&mut Self, String> {
        self.time = time
            .format(&well_known::Rfc3339)
            .map_err(|e| format!("Failed on format the time: {}", e.to_string()))?;

        Ok(self)
    }
}

impl Default for GpxFragments {
    fn default() -> Self {
        Self::new()
    }
}
