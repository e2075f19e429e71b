/// Zips art and info into rows of `art padded to art_width`, a space, then
/// the info line. The shorter side is padded with empty lines.
pub fn compose<A, I>(art_lines: &[A], info_lines: &[I], art_width: usize) -> Vec<String>
where
    A: AsRef<str>,
    I: AsRef<str>,
{
    let line_count = art_lines.len().max(info_lines.len());
    (0..line_count)
        .map(|i| {
            let art = art_lines.get(i).map_or("", |l| l.as_ref());
            let info = info_lines.get(i).map_or("", |l| l.as_ref());
            format!("{art:<art_width$} {info}")
        })
        .collect()
}
