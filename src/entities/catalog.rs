//! Embedded catalog of commonly used named HTML character references

/// (name without `&`/`;`, codepoints, description)
pub(super) const EMBEDDED: &[(&str, &[u32], &str)] = &[
    ("AElig", &[198], "Latin capital letter AE"),
    ("Aacute", &[193], "Latin capital letter A with acute"),
    ("Agrave", &[192], "Latin capital letter A with grave"),
    ("Alpha", &[913], "Greek capital letter alpha"),
    ("Aring", &[197], "Latin capital letter A with ring above"),
    ("Auml", &[196], "Latin capital letter A with diaeresis"),
    ("Beta", &[914], "Greek capital letter beta"),
    ("Ccedil", &[199], "Latin capital letter C with cedilla"),
    ("Delta", &[916], "Greek capital letter delta"),
    ("Eacute", &[201], "Latin capital letter E with acute"),
    ("Gamma", &[915], "Greek capital letter gamma"),
    ("Lambda", &[923], "Greek capital letter lambda"),
    ("Ntilde", &[209], "Latin capital letter N with tilde"),
    ("Omega", &[937], "Greek capital letter omega"),
    ("Ouml", &[214], "Latin capital letter O with diaeresis"),
    ("Pi", &[928], "Greek capital letter pi"),
    ("Sigma", &[931], "Greek capital letter sigma"),
    ("Theta", &[920], "Greek capital letter theta"),
    ("Uuml", &[220], "Latin capital letter U with diaeresis"),
    ("aacute", &[225], "Latin small letter a with acute"),
    ("acute", &[180], "Acute accent"),
    ("aelig", &[230], "Latin small letter ae"),
    ("agrave", &[224], "Latin small letter a with grave"),
    ("alpha", &[945], "Greek small letter alpha"),
    ("amp", &[38], "Ampersand"),
    ("and", &[8743], "Logical and"),
    ("ang", &[8736], "Angle"),
    ("apos", &[39], "Apostrophe"),
    ("aring", &[229], "Latin small letter a with ring above"),
    ("asymp", &[8776], "Almost equal to"),
    ("auml", &[228], "Latin small letter a with diaeresis"),
    ("bdquo", &[8222], "Double low-9 quotation mark"),
    ("beta", &[946], "Greek small letter beta"),
    ("brvbar", &[166], "Broken bar"),
    ("bull", &[8226], "Bullet"),
    ("cap", &[8745], "Intersection"),
    ("ccedil", &[231], "Latin small letter c with cedilla"),
    ("cent", &[162], "Cent sign"),
    ("check", &[10003], "Check mark"),
    ("clubs", &[9827], "Black club suit"),
    ("copy", &[169], "Copyright sign"),
    ("crarr", &[8629], "Downwards arrow with corner leftwards"),
    ("cup", &[8746], "Union"),
    ("curren", &[164], "Currency sign"),
    ("dagger", &[8224], "Dagger"),
    ("darr", &[8595], "Downwards arrow"),
    ("deg", &[176], "Degree sign"),
    ("delta", &[948], "Greek small letter delta"),
    ("diams", &[9830], "Black diamond suit"),
    ("divide", &[247], "Division sign"),
    ("eacute", &[233], "Latin small letter e with acute"),
    ("egrave", &[232], "Latin small letter e with grave"),
    ("empty", &[8709], "Empty set"),
    ("emsp", &[8195], "Em space"),
    ("ensp", &[8194], "En space"),
    ("epsilon", &[949], "Greek small letter epsilon"),
    ("equiv", &[8801], "Identical to"),
    ("euml", &[235], "Latin small letter e with diaeresis"),
    ("euro", &[8364], "Euro sign"),
    ("exist", &[8707], "There exists"),
    ("forall", &[8704], "For all"),
    ("frac12", &[189], "Vulgar fraction one half"),
    ("frac14", &[188], "Vulgar fraction one quarter"),
    ("frac34", &[190], "Vulgar fraction three quarters"),
    ("gamma", &[947], "Greek small letter gamma"),
    ("ge", &[8805], "Greater-than or equal to"),
    ("gt", &[62], "Greater-than sign"),
    ("harr", &[8596], "Left right arrow"),
    ("hearts", &[9829], "Black heart suit"),
    ("hellip", &[8230], "Horizontal ellipsis"),
    ("iacute", &[237], "Latin small letter i with acute"),
    ("iexcl", &[161], "Inverted exclamation mark"),
    ("infin", &[8734], "Infinity"),
    ("int", &[8747], "Integral"),
    ("iquest", &[191], "Inverted question mark"),
    ("isin", &[8712], "Element of"),
    ("lambda", &[955], "Greek small letter lambda"),
    ("laquo", &[171], "Left-pointing double angle quotation mark"),
    ("larr", &[8592], "Leftwards arrow"),
    ("lceil", &[8968], "Left ceiling"),
    ("ldquo", &[8220], "Left double quotation mark"),
    ("le", &[8804], "Less-than or equal to"),
    ("lfloor", &[8970], "Left floor"),
    ("lowast", &[8727], "Asterisk operator"),
    ("loz", &[9674], "Lozenge"),
    ("lsaquo", &[8249], "Single left-pointing angle quotation mark"),
    ("lsquo", &[8216], "Left single quotation mark"),
    ("lt", &[60], "Less-than sign"),
    ("macr", &[175], "Macron"),
    ("mdash", &[8212], "Em dash"),
    ("micro", &[181], "Micro sign"),
    ("middot", &[183], "Middle dot"),
    ("minus", &[8722], "Minus sign"),
    ("mu", &[956], "Greek small letter mu"),
    ("nabla", &[8711], "Nabla"),
    ("nbsp", &[160], "No-break space"),
    ("ndash", &[8211], "En dash"),
    ("ne", &[8800], "Not equal to"),
    ("ni", &[8715], "Contains as member"),
    ("not", &[172], "Not sign"),
    ("notin", &[8713], "Not an element of"),
    ("ntilde", &[241], "Latin small letter n with tilde"),
    ("oacute", &[243], "Latin small letter o with acute"),
    ("oelig", &[339], "Latin small ligature oe"),
    ("omega", &[969], "Greek small letter omega"),
    ("oplus", &[8853], "Circled plus"),
    ("or", &[8744], "Logical or"),
    ("ordf", &[170], "Feminine ordinal indicator"),
    ("ordm", &[186], "Masculine ordinal indicator"),
    ("otimes", &[8855], "Circled times"),
    ("ouml", &[246], "Latin small letter o with diaeresis"),
    ("para", &[182], "Pilcrow sign"),
    ("part", &[8706], "Partial differential"),
    ("permil", &[8240], "Per mille sign"),
    ("perp", &[8869], "Up tack"),
    ("phi", &[966], "Greek small letter phi"),
    ("pi", &[960], "Greek small letter pi"),
    ("plusmn", &[177], "Plus-minus sign"),
    ("pound", &[163], "Pound sign"),
    ("prime", &[8242], "Prime"),
    ("prod", &[8719], "N-ary product"),
    ("prop", &[8733], "Proportional to"),
    ("quot", &[34], "Quotation mark"),
    ("radic", &[8730], "Square root"),
    ("raquo", &[187], "Right-pointing double angle quotation mark"),
    ("rarr", &[8594], "Rightwards arrow"),
    ("rceil", &[8969], "Right ceiling"),
    ("rdquo", &[8221], "Right double quotation mark"),
    ("reg", &[174], "Registered sign"),
    ("rfloor", &[8971], "Right floor"),
    ("rsaquo", &[8250], "Single right-pointing angle quotation mark"),
    ("rsquo", &[8217], "Right single quotation mark"),
    ("sbquo", &[8218], "Single low-9 quotation mark"),
    ("sdot", &[8901], "Dot operator"),
    ("sect", &[167], "Section sign"),
    ("shy", &[173], "Soft hyphen"),
    ("sigma", &[963], "Greek small letter sigma"),
    ("sim", &[8764], "Tilde operator"),
    ("spades", &[9824], "Black spade suit"),
    ("sub", &[8834], "Subset of"),
    ("sube", &[8838], "Subset of or equal to"),
    ("sum", &[8721], "N-ary summation"),
    ("sup", &[8835], "Superset of"),
    ("sup1", &[185], "Superscript one"),
    ("sup2", &[178], "Superscript two"),
    ("sup3", &[179], "Superscript three"),
    ("supe", &[8839], "Superset of or equal to"),
    ("szlig", &[223], "Latin small letter sharp s"),
    ("tau", &[964], "Greek small letter tau"),
    ("there4", &[8756], "Therefore"),
    ("theta", &[952], "Greek small letter theta"),
    ("thinsp", &[8201], "Thin space"),
    ("times", &[215], "Multiplication sign"),
    ("trade", &[8482], "Trade mark sign"),
    ("uacute", &[250], "Latin small letter u with acute"),
    ("uarr", &[8593], "Upwards arrow"),
    ("uml", &[168], "Diaeresis"),
    ("uuml", &[252], "Latin small letter u with diaeresis"),
    ("yen", &[165], "Yen sign"),
    ("zwj", &[8205], "Zero width joiner"),
    ("zwnj", &[8204], "Zero width non-joiner"),
];
