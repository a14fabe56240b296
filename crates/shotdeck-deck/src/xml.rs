//! DrawingML building blocks for slide parts.

/// English Metric Units per inch.
const EMU_PER_INCH: f64 = 914_400.0;

/// Convert inches to EMU.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Escape text for XML content.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Style for a text box.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Point size
    pub size: f32,
    pub bold: bool,
    /// RRGGBB hex
    pub color: &'static str,
    pub align: Align,
}

impl TextStyle {
    pub fn new(size: f32, color: &'static str) -> Self {
        Self {
            size,
            bold: false,
            color,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

fn xfrm(x: f64, y: f64, w: f64, h: f64) -> String {
    format!(
        "<a:xfrm><a:off x=\"{}\" y=\"{}\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm>",
        emu(x),
        emu(y),
        emu(w),
        emu(h)
    )
}

/// A multi-line text box shape. Position and extent in inches.
pub fn text_box(
    id: u32,
    name: &str,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    lines: &[String],
    style: TextStyle,
) -> String {
    let bold = if style.bold { " b=\"1\"" } else { "" };
    let algn = match style.align {
        Align::Left => String::new(),
        Align::Right => "<a:pPr algn=\"r\"/>".to_string(),
    };
    let size_hundredths = (style.size * 100.0).round() as i32;

    let paragraphs: String = lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                format!("<a:p>{algn}<a:endParaRPr lang=\"en-US\" sz=\"{size_hundredths}\"/></a:p>")
            } else {
                format!(
                    "<a:p>{algn}<a:r><a:rPr lang=\"en-US\" sz=\"{size_hundredths}\"{bold} dirty=\"0\">\
                     <a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>\
                     <a:latin typeface=\"Inter\"/></a:rPr>\
                     <a:t>{text}</a:t></a:r></a:p>",
                    color = style.color,
                    text = escape_xml(line),
                )
            }
        })
        .collect();

    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/>\
         <p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
         <p:spPr>{frame}<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>\
         <p:txBody><a:bodyPr wrap=\"square\" anchor=\"t\"/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>",
        name = escape_xml(name),
        frame = xfrm(x, y, w, h),
    )
}

/// A filled, stroked rounded-rectangle panel. Position and extent in
/// inches, colors as RRGGBB hex.
pub fn round_rect(
    id: u32,
    name: &str,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: &str,
    stroke: &str,
) -> String {
    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/>\
         <p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
         <p:spPr>{frame}<a:prstGeom prst=\"roundRect\"><a:avLst/></a:prstGeom>\
         <a:solidFill><a:srgbClr val=\"{fill}\"/></a:solidFill>\
         <a:ln><a:solidFill><a:srgbClr val=\"{stroke}\"/></a:solidFill></a:ln></p:spPr>\
         <p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang=\"en-US\"/></a:p></p:txBody></p:sp>",
        name = escape_xml(name),
        frame = xfrm(x, y, w, h),
    )
}

/// Wrap shapes into a complete slide part with a solid background.
pub fn slide_part(background: &str, shapes: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
         <p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
         xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
         <p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{background}\"/></a:solidFill>\
         <a:effectLst/></p:bgPr></p:bg>\
         <p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
         <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
         {shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>",
        shapes = shapes.concat(),
    )
}
