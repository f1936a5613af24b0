pub trait ToTitleCase {
    /// Returns a copy with the first letter of every word upper-cased and
    /// the rest lower-cased.
    fn to_title_case(&self) -> String;
}

impl ToTitleCase for str {
    fn to_title_case(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut word_start = true;
        for c in self.chars() {
            if c.is_alphabetic() {
                if word_start {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
                word_start = false;
            } else {
                out.push(c);
                word_start = true;
            }
        }
        out
    }
}

impl ToTitleCase for String {
    fn to_title_case(&self) -> String {
        self.as_str().to_title_case()
    }
}
