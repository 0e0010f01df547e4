//! Script header template
//!
//! The header is fixed; only the file name and the creation date vary.

use std::path::Path;

use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;

const RULE: &str = "#-----------------------------------------------------------------------------";

/// Render the header for a script named `name`, created on `date`
pub(crate) fn render(name: &str, date: NaiveDate) -> String {
    format!(
        "#!/usr/bin/env python3\n\
         # -*- coding: utf-8 -*-\n\
         {RULE}\n\
         # File: {name}\n\
         # Date: {date}\n\
         {RULE}\n\
         # Synopsis\n\
         {RULE}\n\
         \n\
         if __name__ == '__main__':\n    pass\n",
        date = date.format(DATE_FORMAT),
    )
}

/// Base name of `path` as written into the `File:` line
pub(crate) fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
